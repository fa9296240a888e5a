use crate::error::{Result, ScmVersionError};
use std::fmt;
use std::fs;
use std::path::Path;

/// The next intended release version, tracked in a committed file.
///
/// A candidate is a plain `X.Y.Z` version with an optional pre-release suffix
/// introduced by a single hyphen (e.g. "1.0.0-p1"). Anything looser is
/// rejected rather than guessed at: more than one hyphen, missing components,
/// or a build-metadata segment are all validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateVersion {
    value: String,
}

impl CandidateVersion {
    /// Parse and validate a candidate version string.
    ///
    /// Surrounding whitespace is trimmed first, so the content of a version
    /// file can be passed in as read.
    ///
    /// # Arguments
    /// * `s` - Candidate string to parse (e.g., "1.0.0" or "1.0.0-p1")
    ///
    /// # Returns
    /// * `Ok(CandidateVersion)` - Successfully validated candidate
    /// * `Err` - If the string is not a well-formed `X.Y.Z[-pre]` version
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ScmVersionError::candidate("empty version string"));
        }

        if trimmed.matches('-').count() > 1 {
            return Err(ScmVersionError::candidate(format!(
                "'{}' contains more than one hyphen",
                trimmed
            )));
        }

        let parsed = semver::Version::parse(trimmed).map_err(|e| {
            ScmVersionError::candidate(format!(
                "'{}' is not a well-formed X.Y.Z[-pre] version: {}",
                trimmed, e
            ))
        })?;

        if !parsed.build.is_empty() {
            return Err(ScmVersionError::candidate(format!(
                "'{}' carries a build-metadata segment",
                trimmed
            )));
        }

        Ok(CandidateVersion {
            value: trimmed.to_string(),
        })
    }

    /// Read and validate the candidate from a version file.
    ///
    /// # Arguments
    /// * `path` - Path to the version file (normally at the repository root)
    ///
    /// # Returns
    /// * `Ok(CandidateVersion)` - File existed and held a valid candidate
    /// * `Err` - If the file is missing, unreadable, or holds an invalid version
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ScmVersionError::version_file(format!("cannot read '{}': {}", path.display(), e))
        })?;

        Self::parse(&raw)
    }

    /// The validated version string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True when the candidate carries a pre-release suffix (e.g. "1.0.0-p1")
    pub fn has_pre_release(&self) -> bool {
        self.value.contains('-')
    }
}

impl fmt::Display for CandidateVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_plain_version() {
        let c = CandidateVersion::parse("1.2.3").unwrap();
        assert_eq!(c.as_str(), "1.2.3");
        assert!(!c.has_pre_release());
    }

    #[test]
    fn test_parse_with_pre_release() {
        let c = CandidateVersion::parse("1.0.0-p1").unwrap();
        assert_eq!(c.as_str(), "1.0.0-p1");
        assert!(c.has_pre_release());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let c = CandidateVersion::parse("  0.0.2\n").unwrap();
        assert_eq!(c.as_str(), "0.0.2");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CandidateVersion::parse("   \n"),
            Err(ScmVersionError::Candidate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_multiple_hyphens() {
        assert!(matches!(
            CandidateVersion::parse("1.0.0-p1-x2"),
            Err(ScmVersionError::Candidate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_short_version() {
        assert!(CandidateVersion::parse("1.0").is_err());
    }

    #[test]
    fn test_parse_rejects_v_prefix() {
        // The version file holds a bare version, never a tag name
        assert!(CandidateVersion::parse("v1.0.0").is_err());
    }

    #[test]
    fn test_parse_rejects_build_metadata() {
        assert!(matches!(
            CandidateVersion::parse("1.0.0+build5"),
            Err(ScmVersionError::Candidate(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(CandidateVersion::parse("one.two.three").is_err());
    }

    #[test]
    fn test_display() {
        let c = CandidateVersion::parse("1.2.3-rc1").unwrap();
        assert_eq!(c.to_string(), "1.2.3-rc1");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0.3.0\n").unwrap();
        file.flush().unwrap();

        let c = CandidateVersion::from_file(file.path()).unwrap();
        assert_eq!(c.as_str(), "0.3.0");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = CandidateVersion::from_file(&dir.path().join("version")).unwrap_err();
        assert!(matches!(err, ScmVersionError::VersionFile(_)));
    }
}
