use git2::Oid;
use serde::Serialize;
use std::fmt;

/// Major/minor pair carried by a stable release tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ShortVersion {
    pub major: u32,
    pub minor: u32,
}

impl ShortVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        ShortVersion { major, minor }
    }
}

impl fmt::Display for ShortVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A stable release origin: the version a tag encodes and the commit it marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionPoint {
    pub major: u32,
    pub minor: u32,
    #[serde(serialize_with = "super::serialize_oid")]
    pub commit_id: Oid,
}

impl VersionPoint {
    pub fn new(version: ShortVersion, commit_id: Oid) -> Self {
        VersionPoint {
            major: version.major,
            minor: version.minor,
            commit_id,
        }
    }

    pub fn short_version(&self) -> ShortVersion {
        ShortVersion::new(self.major, self.minor)
    }
}
