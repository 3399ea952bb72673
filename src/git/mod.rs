//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries git-semver needs, allowing the scanner to run against a real
//! repository or an in-memory mock.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_semver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_semver::Result<()> {
//! let head = repo.head()?;
//! for commit in repo.log_from(head)?.take(5) {
//!     let commit = commit?;
//!     println!("{} {}", commit.short_hash(), commit.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Number of hex characters in an abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 7;

/// Commit information needed to render history
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub id: Oid,
    /// Raw commit message, usually ending in a newline
    pub message: String,
}

impl CommitInfo {
    pub fn short_hash(&self) -> String {
        short_hash(self.id)
    }
}

impl PartialEq for CommitInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CommitInfo {}

/// A configured remote and its URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub urls: Vec<String>,
}

/// Lazy walk over commits, most recent first
pub type CommitIter<'a> = Box<dyn Iterator<Item = Result<CommitInfo>> + 'a>;

/// First seven hex characters of an object id
pub fn short_hash(oid: Oid) -> String {
    let mut hash = oid.to_string();
    hash.truncate(SHORT_HASH_LEN);
    hash
}

/// Read-only git queries used by the scanner
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the matching
/// [crate::error::GitSemverError] variants.
pub trait Repository {
    /// List every tag as `(reference name, target commit)`
    ///
    /// Reference names carry the `refs/tags/` namespace.
    fn list_tags(&self) -> Result<Vec<(String, Oid)>>;

    /// Resolve a tag name (without namespace) to the commit it points at
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Commit of the tag, annotated tags peeled
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    fn resolve_tag(&self, name: &str) -> Result<Option<Oid>>;

    /// Commit currently checked out
    fn head(&self) -> Result<Oid>;

    /// Walk commits reachable from `from`, most recent first
    ///
    /// The walk is lazy and each call starts a fresh walk.
    fn log_from(&self, from: Oid) -> Result<CommitIter<'_>>;

    /// Configured remotes, `origin` first
    fn remotes(&self) -> Result<Vec<Remote>>;
}
