//! Repository access abstraction
//!
//! The version inference only needs four read-only capabilities from a
//! repository: listing tags, resolving a reference, testing ancestry and
//! reading a commit's parents. They are expressed by the [Repository] trait so
//! the analysis can run against a real repository or a fabricated graph.
//!
//! # Implementations
//!
//! - [repository::Git2Repository]: reads a real repository through the `git2`
//!   crate (requires the `git` feature, enabled by default)
//! - [mock::MockRepository]: an in-memory commit graph for testing
//!
//! ```rust
//! # use dev_version::git::{MockRepository, Repository};
//! # fn main() -> dev_version::Result<()> {
//! let mut repo = MockRepository::new();
//! let root = repo.add_commit("a1", &[]);
//! let tip = repo.add_commit("b2", &["a1"]);
//! assert!(repo.is_ancestor(&root, &tip)?);
//! assert_eq!(repo.parents(&tip)?, vec![root]);
//! # Ok(())
//! # }
//! ```

pub mod mock;
#[cfg(feature = "git")]
pub mod repository;

pub use mock::MockRepository;
#[cfg(feature = "git")]
pub use repository::Git2Repository;

use crate::error::Result;
use std::fmt;

/// Opaque identity of a commit (its hex content hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    pub fn new(hash: impl Into<String>) -> Self {
        CommitId(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag together with the commit it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Short tag name (e.g. "v1.2.3", "w.2022.04")
    pub name: String,
    /// Commit the tag eventually points at
    pub target: CommitId,
    /// Whether the tag carries its own tag object; lightweight tags do not
    pub annotated: bool,
}

impl TagRef {
    pub fn annotated(name: impl Into<String>, target: CommitId) -> Self {
        TagRef {
            name: name.into(),
            target,
            annotated: true,
        }
    }

    pub fn lightweight(name: impl Into<String>, target: CommitId) -> Self {
        TagRef {
            name: name.into(),
            target,
            annotated: false,
        }
    }
}

/// Read-only repository capability consumed by the version analysis
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map their
/// backend failures to [crate::error::DevVersionError] variants; an unknown
/// commit or unresolvable reference is a `Reference` error.
pub trait Repository {
    /// List every tag with the commit it references
    ///
    /// The order of the returned tags is the iteration order used when several
    /// release tags share a major number, so implementations should return a
    /// stable order.
    fn list_tags(&self) -> Result<Vec<TagRef>>;

    /// Resolve a branch name, tag name, `HEAD` or hash prefix to one commit
    fn resolve_commit(&self, spec: &str) -> Result<CommitId>;

    /// Whether `ancestor` is reachable from `descendant` through any parent chain
    ///
    /// A commit is considered an ancestor of itself.
    fn is_ancestor(&self, ancestor: &CommitId, descendant: &CommitId) -> Result<bool>;

    /// Ordered parent list of a commit; the first entry is the first parent
    fn parents(&self, commit: &CommitId) -> Result<Vec<CommitId>>;
}
