//! Checkout-to-version workflow.
//!
//! This module contains the derivation workflow kept out of main.rs. It
//! provides a clean separation between CLI argument parsing and business
//! logic, and depends on the [Repository](crate::git::Repository) trait so
//! the whole flow can run against a mock.

use crate::config::Config;
use crate::domain::CandidateVersion;
use crate::error::Result;
use crate::git::Repository;
use crate::resolver::{self, OutputMode};

/// Derive the version string for the checkout behind `repo`.
///
/// Reads the candidate from the configured version file at the working tree
/// root, runs the tag-describe query, and resolves the two into the final
/// version string.
///
/// # Arguments
/// * `repo` - Repository access for the current checkout
/// * `config` - Query and version-file settings
/// * `mode` - Output format for development versions
///
/// # Returns
/// * `Ok(String)` - The derived version
/// * `Err` - Missing version file, missing tag, stale candidate, or git failure
pub fn derive_version(repo: &dyn Repository, config: &Config, mode: OutputMode) -> Result<String> {
    let version_file = repo.workdir()?.join(&config.candidate.file);
    let candidate = CandidateVersion::from_file(&version_file)?;

    let describe = repo.describe(&config.query.tag_pattern, config.query.abbrev)?;

    resolver::resolve(candidate.as_str(), describe.as_deref(), mode)
}
