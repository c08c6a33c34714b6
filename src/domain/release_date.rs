use super::commit::Commit;
use chrono::{DateTime, FixedOffset};
use git2::Oid;
use serde::Serialize;

/// Release date of a commit and of the stable release its version extends.
///
/// `date` and `commit_id` always describe the resolved commit itself. The
/// `original_*` pair starts out identical and only moves to an older commit
/// when a stable tagged ancestor is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseDate {
    pub date: DateTime<FixedOffset>,
    #[serde(serialize_with = "super::serialize_oid")]
    pub commit_id: Oid,
    pub original_date: DateTime<FixedOffset>,
    #[serde(serialize_with = "super::serialize_oid")]
    pub original_commit_id: Oid,
}

impl ReleaseDate {
    /// A commit that is its own origin
    pub fn for_commit(commit: &Commit) -> Self {
        ReleaseDate {
            date: commit.timestamp,
            commit_id: commit.id,
            original_date: commit.timestamp,
            original_commit_id: commit.id,
        }
    }

    /// Replace the origin with `origin`, keeping the current point
    pub fn with_origin(self, origin: &Commit) -> Self {
        ReleaseDate {
            original_date: origin.timestamp,
            original_commit_id: origin.id,
            ..self
        }
    }

    pub fn is_own_origin(&self) -> bool {
        self.original_commit_id == self.commit_id
    }
}
