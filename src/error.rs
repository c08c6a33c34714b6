use thiserror::Error;

/// Unified error type for release date resolution
#[derive(Error, Debug)]
pub enum ReleaseDateError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Commit '{commit}' bears more than one stable tag: {}", .tags.join(", "))]
    AmbiguousTag { commit: String, tags: Vec<String> },

    #[error("Target '{target}' of tag '{tag}' isn't a commit")]
    MalformedTag { tag: String, target: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release-date
pub type Result<T> = std::result::Result<T, ReleaseDateError>;

impl ReleaseDateError {
    /// Missing commit
    pub fn commit_not_found(name: impl Into<String>) -> Self {
        ReleaseDateError::NotFound {
            kind: "Commit",
            name: name.into(),
        }
    }

    /// Missing branch
    pub fn branch_not_found(name: impl Into<String>) -> Self {
        ReleaseDateError::NotFound {
            kind: "Branch",
            name: name.into(),
        }
    }

    /// No common ancestor between two commits
    pub fn merge_base_not_found(a: impl std::fmt::Display, b: impl std::fmt::Display) -> Self {
        ReleaseDateError::NotFound {
            kind: "Merge base",
            name: format!("{} and {}", a, b),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseDateError::Config(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReleaseDateError::NotFound { .. })
    }
}
