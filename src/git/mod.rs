//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two pieces of
//! checkout state the tool consumes: the tag-describe query and the location
//! of the working tree. The concrete implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Common git operation trait for abstraction
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ScmVersionError] variants.
pub trait Repository: Send + Sync {
    /// Run the tag-describe query from the current checkout position.
    ///
    /// Finds the nearest reachable tag matching `pattern` and reports it
    /// together with the commit distance and the `abbrev`-character commit
    /// identifier, in the usual `v1.2.3[-<count>-g<hash>]` text form.
    ///
    /// # Arguments
    /// * `pattern` - Glob restricting which tags are considered (e.g. "v[0-9]*")
    /// * `abbrev` - Abbreviated-hash length for the commit identifier
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The describe output
    /// * `Ok(None)` - No tag matching the pattern is reachable
    /// * `Err` - If the query itself fails
    fn describe(&self, pattern: &str, abbrev: u32) -> Result<Option<String>>;

    /// Absolute path of the working tree root.
    ///
    /// This is where the version file lives.
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Root of the working tree
    /// * `Err` - If the repository has no working tree (e.g. bare)
    fn workdir(&self) -> Result<PathBuf>;
}
