//! Domain types - immutable snapshots independent of any git backend

pub mod commit;
pub mod release_date;
pub mod tag;
pub mod version;

pub use commit::{short_oid, Commit};
pub use release_date::ReleaseDate;
pub use tag::{Tag, TagTarget};
pub use version::{ShortVersion, VersionPoint};

use git2::Oid;
use serde::Serializer;

/// Serialize an object id as its full hex string
pub(crate) fn serialize_oid<S: Serializer>(oid: &Oid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(oid)
}
