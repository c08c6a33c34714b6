//! Branching scheme detection
//!
//! Under the simplified (trunk-based, GitHub-flow) scheme every commit is its
//! own release origin and historical stable tags are never consulted.

use crate::error::Result;
use crate::git::HistoryBackend;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decides whether the simplified scheme applies to a repository
pub trait BranchingSchemeClassifier {
    fn applies_simplified_scheme(&self, repo: &dyn HistoryBackend) -> Result<bool>;
}

/// Configured scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeMode {
    /// Detect from the branches present
    #[default]
    Auto,
    /// Always use the simplified scheme
    Trunk,
    /// Never use the simplified scheme
    Gitflow,
}

/// The simplified scheme applies when the repository has no develop branch
#[derive(Debug, Clone)]
pub struct DevelopBranchClassifier {
    develop_branch: String,
}

impl DevelopBranchClassifier {
    pub fn new(develop_branch: impl Into<String>) -> Self {
        DevelopBranchClassifier {
            develop_branch: develop_branch.into(),
        }
    }
}

impl Default for DevelopBranchClassifier {
    fn default() -> Self {
        Self::new("develop")
    }
}

impl BranchingSchemeClassifier for DevelopBranchClassifier {
    fn applies_simplified_scheme(&self, repo: &dyn HistoryBackend) -> Result<bool> {
        let has_develop = repo.has_branch(&self.develop_branch)?;
        debug!(
            develop_branch = %self.develop_branch,
            has_develop,
            "classified branching scheme"
        );
        Ok(!has_develop)
    }
}

/// Classifier with a fixed answer
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub bool);

impl BranchingSchemeClassifier for FixedScheme {
    fn applies_simplified_scheme(&self, _repo: &dyn HistoryBackend) -> Result<bool> {
        Ok(self.0)
    }
}

/// Build the classifier for a configured mode
pub fn classifier_for(
    mode: SchemeMode,
    develop_branch: &str,
) -> Box<dyn BranchingSchemeClassifier> {
    match mode {
        SchemeMode::Auto => Box::new(DevelopBranchClassifier::new(develop_branch)),
        SchemeMode::Trunk => Box::new(FixedScheme(true)),
        SchemeMode::Gitflow => Box::new(FixedScheme(false)),
    }
}
