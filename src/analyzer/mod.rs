//! Resolution of release dates from tagged history

pub mod version_point_resolver;

pub use version_point_resolver::{version_point_from_tag, VersionPointResolver};
