//! Pure version derivation over tag metadata and a candidate version.
//!
//! Everything here is string computation: the describe query and the version
//! file read happen elsewhere, so resolution is deterministic and idempotent
//! for a given set of inputs.

use crate::domain::{CandidateVersion, TagDescription};
use crate::error::{Result, ScmVersionError};

/// Output format for derived versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Semantic pre-release style, e.g. "1.0.1-2.gde2198c"
    Semantic,
    /// PEP 440 development style, e.g. "1.0.1.dev2+gde2198c"
    Pep440,
}

/// Derive the final version string for a checkout.
///
/// With HEAD exactly on a matching tag, the result is the tag's version
/// (leading 'v' stripped) in both modes. With commits since the tag, the
/// result is a development version based on the candidate, carrying the
/// commit distance and abbreviated hash:
///
/// - `Pep440`: `"{candidate}.dev{count}+{hash}"`
/// - `Semantic`: `"{candidate}-{count}.{hash}"`, or `"{candidate}.{count}.{hash}"`
///   when the candidate already carries a pre-release suffix
///
/// # Arguments
/// * `candidate` - Content of the version file (the next intended release)
/// * `describe` - Tag-describe output, or `None` when no matching tag exists
/// * `mode` - Output format to use for development versions
///
/// # Returns
/// * `Ok(String)` - The derived version
/// * `Err` - No matching tag, invalid inputs, or a candidate that was never
///   bumped past the tag it is supposed to supersede
pub fn resolve(candidate: &str, describe: Option<&str>, mode: OutputMode) -> Result<String> {
    let candidate = CandidateVersion::parse(candidate)?;

    let describe = describe.ok_or_else(|| {
        ScmVersionError::no_matching_tag(
            "no tag matching the release pattern is reachable from the current checkout",
        )
    })?;

    match TagDescription::parse(describe)? {
        TagDescription::Released { version } => Ok(version),
        TagDescription::Developing {
            version,
            commits_since,
            short_hash,
        } => {
            if candidate.as_str() == version {
                return Err(ScmVersionError::stale_candidate(format!(
                    "candidate '{}' still equals the last released tag; bump the version file",
                    candidate
                )));
            }

            match mode {
                OutputMode::Pep440 => {
                    Ok(format!("{}.dev{}+{}", candidate, commits_since, short_hash))
                }
                OutputMode::Semantic => {
                    if candidate.has_pre_release() {
                        Ok(format!("{}.{}.{}", candidate, commits_since, short_hash))
                    } else {
                        Ok(format!("{}-{}.{}", candidate, commits_since, short_hash))
                    }
                }
            }
        }
    }
}
