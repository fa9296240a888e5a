use crate::error::{Result, ScmVersionError};
use crate::git::Repository;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    describes: HashMap<String, String>,
    workdir: Option<PathBuf>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            describes: HashMap::new(),
            workdir: None,
        }
    }

    /// Preset the describe output for a tag pattern
    pub fn add_describe(&mut self, pattern: impl Into<String>, output: impl Into<String>) {
        self.describes.insert(pattern.into(), output.into());
    }

    /// Set the working tree root
    pub fn set_workdir(&mut self, path: impl Into<PathBuf>) {
        self.workdir = Some(path.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe(&self, pattern: &str, _abbrev: u32) -> Result<Option<String>> {
        Ok(self.describes.get(pattern).cloned())
    }

    fn workdir(&self) -> Result<PathBuf> {
        self.workdir
            .clone()
            .ok_or_else(|| ScmVersionError::repository("mock repository has no working tree"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_describe() {
        let mut repo = MockRepository::new();
        repo.add_describe("v[0-9]*", "v1.0.0-2-gde2198c");

        assert_eq!(
            repo.describe("v[0-9]*", 9).unwrap(),
            Some("v1.0.0-2-gde2198c".to_string())
        );
        assert_eq!(repo.describe("rel-*", 9).unwrap(), None);
    }

    #[test]
    fn test_mock_repository_workdir() {
        let mut repo = MockRepository::new();
        assert!(repo.workdir().is_err());

        repo.set_workdir("/tmp/checkout");
        assert_eq!(repo.workdir().unwrap(), PathBuf::from("/tmp/checkout"));
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert_eq!(repo.describe("v[0-9]*", 9).unwrap(), None);
    }
}
