use chrono::{DateTime, FixedOffset};
use git2::Oid;

/// Number of hex characters used when a commit id is shown to a user
pub const SHORT_ID_LEN: usize = 7;

/// Abbreviated hex form of an object id
pub fn short_oid(oid: Oid) -> String {
    let mut hex = oid.to_string();
    hex.truncate(SHORT_ID_LEN);
    hex
}

/// Snapshot of a commit as seen by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Oid,
    /// Committer time, keeping the committer's UTC offset
    pub timestamp: DateTime<FixedOffset>,
}

impl Commit {
    pub fn new(id: Oid, timestamp: DateTime<FixedOffset>) -> Self {
        Commit { id, timestamp }
    }

    pub fn short_id(&self) -> String {
        short_oid(self.id)
    }
}
