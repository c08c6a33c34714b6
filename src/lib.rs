pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod scheme;
pub mod ui;
pub mod version;

pub use analyzer::VersionPointResolver;
pub use domain::{Commit, ReleaseDate, Tag, TagTarget, VersionPoint};
pub use error::{ReleaseDateError, Result};
pub use git::HistoryBackend;
