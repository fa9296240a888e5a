use crate::error::{Result, ScmVersionError};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the repository containing `path`, walking parent directories
    /// like git itself.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn describe(&self, pattern: &str, abbrev: u32) -> Result<Option<String>> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags().pattern(pattern);

        let describe = match self.repo.describe(&opts) {
            Ok(describe) => describe,
            // libgit2 reports "no tags can describe" with the describe class
            Err(e) if e.class() == git2::ErrorClass::Describe => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(abbrev);

        Ok(Some(describe.format(Some(&format))?))
    }

    fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| ScmVersionError::repository("bare repository has no working tree"))
    }
}

// SAFETY: only read operations cross this boundary; libgit2 repository
// handles are safe to share between threads for reads.
unsafe impl Sync for Git2Repository {}
