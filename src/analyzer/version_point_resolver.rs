use crate::config::Config;
use crate::domain::{short_oid, Commit, ReleaseDate, ShortVersion, Tag, TagTarget, VersionPoint};
use crate::error::{ReleaseDateError, Result};
use crate::git::HistoryBackend;
use crate::scheme::{classifier_for, BranchingSchemeClassifier, DevelopBranchClassifier};
use crate::version::{ShortVersionParser, VersionTagParser};
use git2::Oid;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Finds the release date of a commit and the stable release it extends
pub struct VersionPointResolver<'r, B: HistoryBackend> {
    repo: &'r B,
    classifier: Box<dyn BranchingSchemeClassifier>,
    parser: Box<dyn VersionTagParser>,
    main_branch: String,
}

impl<'r, B: HistoryBackend> VersionPointResolver<'r, B> {
    /// Resolver with the default classifier and tag parser
    pub fn new(repo: &'r B, main_branch: impl Into<String>) -> Self {
        VersionPointResolver {
            repo,
            classifier: Box::new(DevelopBranchClassifier::default()),
            parser: Box::new(ShortVersionParser::default()),
            main_branch: main_branch.into(),
        }
    }

    /// Resolver wired from configuration
    pub fn from_config(repo: &'r B, config: &Config) -> Result<Self> {
        Ok(VersionPointResolver {
            repo,
            classifier: classifier_for(config.scheme, &config.develop_branch),
            parser: Box::new(ShortVersionParser::with_prefix(&config.tag_prefix)?),
            main_branch: config.main_branch.clone(),
        })
    }

    pub fn with_classifier(mut self, classifier: impl BranchingSchemeClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn with_parser(mut self, parser: impl VersionTagParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn main_branch(&self) -> &str {
        &self.main_branch
    }

    /// Release date of `commit_id`, whose calculated version has patch `patch`
    pub fn resolve(&self, commit_id: Oid, patch: u32) -> Result<ReleaseDate> {
        self.resolve_with_point(commit_id, patch)
            .map(|(release_date, _)| release_date)
    }

    /// Like [`Self::resolve`], also returning the version point the origin came from
    pub fn resolve_with_point(
        &self,
        commit_id: Oid,
        patch: u32,
    ) -> Result<(ReleaseDate, Option<VersionPoint>)> {
        let commit = self.repo.lookup_commit(commit_id)?;
        let release_date = ReleaseDate::for_commit(&commit);

        if self.classifier.applies_simplified_scheme(self.repo)? {
            debug!(commit = %commit.short_id(), "simplified scheme, commit is its own origin");
            return Ok((release_date, None));
        }

        // A zero patch opens a new major/minor line
        if patch == 0 {
            debug!(commit = %commit.short_id(), "zero patch, commit is its own origin");
            return Ok((release_date, None));
        }

        match self.find_latest_stable_ancestor(&commit)? {
            Some(point) => {
                let origin = self.repo.lookup_commit(point.commit_id)?;
                debug!(
                    commit = %commit.short_id(),
                    origin = %origin.short_id(),
                    version = %point.short_version(),
                    "resolved release origin"
                );
                Ok((release_date.with_origin(&origin), Some(point)))
            }
            None => {
                debug!(commit = %commit.short_id(), "no stable tagged ancestor");
                Ok((release_date, None))
            }
        }
    }

    /// Nearest stable tagged commit in the history `commit` shares with the main branch
    pub fn find_latest_stable_ancestor(&self, commit: &Commit) -> Result<Option<VersionPoint>> {
        let main_tip = self.repo.branch_tip(&self.main_branch)?;
        let ancestor = self.repo.merge_base(&main_tip, commit)?;

        let tags = self.repo.all_tags()?;
        let mut stable_by_target: HashMap<Oid, Vec<(&Tag, ShortVersion)>> = HashMap::new();
        for tag in &tags {
            if let Some(version) = self.parser.try_parse_major_minor(&tag.name) {
                stable_by_target
                    .entry(tag.target.id())
                    .or_default()
                    .push((tag, version));
            }
        }

        debug!(
            main_branch = %self.main_branch,
            merge_base = %ancestor.short_id(),
            stable_tags = stable_by_target.values().map(Vec::len).sum::<usize>(),
            "searching for stable tagged ancestor"
        );

        if stable_by_target.is_empty() {
            return Ok(None);
        }

        for candidate in self.repo.ancestry_from(&ancestor)? {
            let candidate = candidate?;
            trace!(commit = %candidate.short_id(), "visiting");

            if let Some(found) = stable_by_target.get(&candidate.id) {
                return single_stable_point(&candidate, found).map(Some);
            }
        }

        Ok(None)
    }
}

fn single_stable_point(commit: &Commit, found: &[(&Tag, ShortVersion)]) -> Result<VersionPoint> {
    match found {
        [(tag, version)] => version_point_from_tag(tag, *version),
        _ => {
            let mut tags: Vec<String> = found.iter().map(|(tag, _)| tag.name.clone()).collect();
            tags.sort();
            Err(ReleaseDateError::AmbiguousTag {
                commit: commit.short_id(),
                tags,
            })
        }
    }
}

/// Version point of a stable tag; fails if the tag does not peel to a commit
pub fn version_point_from_tag(tag: &Tag, version: ShortVersion) -> Result<VersionPoint> {
    match tag.target {
        TagTarget::Commit(id) => Ok(VersionPoint::new(version, id)),
        TagTarget::Other { id, .. } => Err(ReleaseDateError::MalformedTag {
            tag: tag.name.clone(),
            target: short_oid(id),
        }),
    }
}
