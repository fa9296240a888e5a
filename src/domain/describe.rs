use crate::error::{Result, ScmVersionError};
use regex::Regex;

/// Structured decomposition of a tag-describe query result.
///
/// A describe string is either a bare tag (`v1.2.3`, HEAD sits exactly on the
/// tag) or `v1.2.3-<count>-g<hash>` (commits exist since the tag). The tag may
/// carry its own pre-release suffix, so `v1.0.0-p1-2-gde2198c` must split at
/// the rightmost `-<digits>-g<hex>` segment, not the first hyphen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagDescription {
    /// HEAD is exactly on a matching tag
    Released {
        /// Version encoded in the tag, leading 'v' stripped
        version: String,
    },
    /// Commits exist since the nearest matching tag
    Developing {
        /// Version encoded in the tag, leading 'v' stripped
        version: String,
        /// Number of commits since the tag
        commits_since: u64,
        /// Abbreviated commit hash, prefixed with "g"
        short_hash: String,
    },
}

impl TagDescription {
    /// Parse a raw describe string into its release state.
    ///
    /// # Arguments
    /// * `raw` - Describe output, e.g. "v0.0.1-4-g60f987bfd" or "v0.0.2"
    ///
    /// # Returns
    /// * `Ok(TagDescription)` - Successfully decomposed describe string
    /// * `Err` - If the string is empty or its version portion is malformed
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ScmVersionError::describe("empty describe string"));
        }

        let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);

        // Greedy first group pins the delimiter to the rightmost -<digits>-g<hex>
        let re = Regex::new(r"^(.+)-([0-9]+)-g([0-9a-f]+)$")
            .map_err(|e| ScmVersionError::describe(format!("invalid describe pattern: {}", e)))?;

        if let Some(caps) = re.captures(stripped) {
            let version = caps[1].to_string();
            let commits_since = caps[2].parse::<u64>().map_err(|_| {
                ScmVersionError::describe(format!("commit count out of range in '{}'", trimmed))
            })?;
            let short_hash = format!("g{}", &caps[3]);

            validate_version(&version, trimmed)?;

            Ok(TagDescription::Developing {
                version,
                commits_since,
                short_hash,
            })
        } else {
            validate_version(stripped, trimmed)?;

            Ok(TagDescription::Released {
                version: stripped.to_string(),
            })
        }
    }
}

/// Check that a version extracted from describe output is a well-formed
/// `X.Y.Z[-pre]` version with at most one hyphen.
fn validate_version(version: &str, raw: &str) -> Result<()> {
    if version.matches('-').count() > 1 {
        return Err(ScmVersionError::describe(format!(
            "tag version in '{}' contains more than one hyphen",
            raw
        )));
    }

    semver::Version::parse(version).map_err(|e| {
        ScmVersionError::describe(format!(
            "tag version '{}' in '{}' is not a well-formed version: {}",
            version, raw, e
        ))
    })?;

    Ok(())
}
