use thiserror::Error;

/// Unified error type for scm-version operations
#[derive(Error, Debug)]
pub enum ScmVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version file error: {0}")]
    VersionFile(String),

    #[error("Invalid candidate version: {0}")]
    Candidate(String),

    #[error("Unrecognized describe output: {0}")]
    Describe(String),

    #[error("No matching tag: {0}")]
    NoMatchingTag(String),

    #[error("Stale candidate version: {0}")]
    StaleCandidate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in scm-version
pub type Result<T> = std::result::Result<T, ScmVersionError>;

impl ScmVersionError {
    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        ScmVersionError::Repository(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScmVersionError::Config(msg.into())
    }

    /// Create a version file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        ScmVersionError::VersionFile(msg.into())
    }

    /// Create a candidate validation error with context
    pub fn candidate(msg: impl Into<String>) -> Self {
        ScmVersionError::Candidate(msg.into())
    }

    /// Create a describe parsing error with context
    pub fn describe(msg: impl Into<String>) -> Self {
        ScmVersionError::Describe(msg.into())
    }

    /// Create a missing tag error with context
    pub fn no_matching_tag(msg: impl Into<String>) -> Self {
        ScmVersionError::NoMatchingTag(msg.into())
    }

    /// Create a stale candidate error with context
    pub fn stale_candidate(msg: impl Into<String>) -> Self {
        ScmVersionError::StaleCandidate(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScmVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScmVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ScmVersionError::candidate("test")
            .to_string()
            .contains("candidate"));
        assert!(ScmVersionError::describe("test")
            .to_string()
            .contains("describe"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ScmVersionError::repository("x"), "Repository error"),
            (ScmVersionError::config("x"), "Configuration error"),
            (ScmVersionError::version_file("x"), "Version file error"),
            (ScmVersionError::candidate("x"), "Invalid candidate version"),
            (ScmVersionError::describe("x"), "Unrecognized describe output"),
            (ScmVersionError::no_matching_tag("x"), "No matching tag"),
            (ScmVersionError::stale_candidate("x"), "Stale candidate version"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ScmVersionError::config(""),
            ScmVersionError::candidate(""),
            ScmVersionError::stale_candidate(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}
