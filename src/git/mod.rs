//! History backend abstraction layer
//!
//! The resolver never talks to libgit2 directly. It reads the commit graph
//! through the [HistoryBackend] trait, which has two implementations:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory commit graph for tests
//!
//! # Usage
//!
//! ```rust
//! # use git_release_date::git::HistoryBackend;
//! # fn example<B: HistoryBackend>(repo: &B) -> Result<(), Box<dyn std::error::Error>> {
//! let tip = repo.branch_tip("master")?;
//! for commit in repo.ancestry_from(&tip)? {
//!     let commit = commit?;
//!     println!("{} {}", commit.short_id(), commit.timestamp);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, Tag};
use crate::error::Result;
use git2::Oid;

/// Lazily produced commits of an ancestry walk
pub type Ancestry<'a> = Box<dyn Iterator<Item = Result<Commit>> + 'a>;

/// Read-only view over a commit graph and its tags.
///
/// Implementations are treated as an immutable snapshot for the duration of
/// a resolution; none of these methods may mutate the repository.
///
/// ## Error Handling
///
/// Missing commits and branches are reported as
/// [crate::error::ReleaseDateError::NotFound]. Backend failures map to the
/// other variants of [crate::error::ReleaseDateError].
pub trait HistoryBackend {
    /// Look up a commit by id
    ///
    /// # Returns
    /// * `Ok(Commit)` - The commit snapshot
    /// * `Err(NotFound)` - If no commit with this id exists
    fn lookup_commit(&self, id: Oid) -> Result<Commit>;

    /// Get the commit at the tip of a local branch
    ///
    /// # Arguments
    /// * `name` - Short branch name (e.g., "master", "develop")
    fn branch_tip(&self, name: &str) -> Result<Commit>;

    /// Whether a local branch with this name exists
    fn has_branch(&self, name: &str) -> Result<bool>;

    /// Most recent commit that is an ancestor of both `a` and `b`.
    ///
    /// A commit counts as its own ancestor, so if `b` is reachable from `a`
    /// the result is `b`.
    fn merge_base(&self, a: &Commit, b: &Commit) -> Result<Commit>;

    /// Walk `start` and all of its ancestors.
    ///
    /// `start` comes first. A commit is only yielded once every descendant of
    /// it within the walk has been; among the commits ready at any point the
    /// most recent by commit time goes next. Each call starts a fresh walk.
    fn ancestry_from(&self, start: &Commit) -> Result<Ancestry<'_>>;

    /// Every tag in the repository, with annotated tags already peeled
    fn all_tags(&self) -> Result<Vec<Tag>>;
}
