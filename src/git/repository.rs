use crate::domain::{Commit, Tag, TagTarget};
use crate::error::{ReleaseDateError, Result};
use crate::git::{Ancestry, HistoryBackend};
use chrono::{DateTime, FixedOffset, TimeZone};
use git2::{BranchType, ErrorCode, ObjectType, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::trace;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Resolve a revision spec (`HEAD`, a branch, a full or short sha) to a commit
    pub fn resolve_commit(&self, spec: &str) -> Result<Commit> {
        let object = self.repo.revparse_single(spec).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                ReleaseDateError::commit_not_found(spec)
            } else {
                e.into()
            }
        })?;

        let commit = object.peel_to_commit()?;
        snapshot(&commit)
    }
}

/// Convert a git timestamp, keeping the committer's offset
pub fn timestamp_from_git(time: git2::Time) -> Result<DateTime<FixedOffset>> {
    FixedOffset::east_opt(time.offset_minutes() * 60)
        .and_then(|offset| offset.timestamp_opt(time.seconds(), 0).single())
        .ok_or_else(|| {
            ReleaseDateError::Git(git2::Error::from_str(&format!(
                "Invalid commit time: {} ({} minutes)",
                time.seconds(),
                time.offset_minutes()
            )))
        })
}

fn snapshot(commit: &git2::Commit<'_>) -> Result<Commit> {
    Ok(Commit::new(commit.id(), timestamp_from_git(commit.time())?))
}

impl HistoryBackend for Git2Repository {
    fn lookup_commit(&self, id: Oid) -> Result<Commit> {
        let commit = self.repo.find_commit(id).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                ReleaseDateError::commit_not_found(id.to_string())
            } else {
                e.into()
            }
        })?;

        snapshot(&commit)
    }

    fn branch_tip(&self, name: &str) -> Result<Commit> {
        let branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .map_err(|e| {
                if e.code() == ErrorCode::NotFound {
                    ReleaseDateError::branch_not_found(name)
                } else {
                    e.into()
                }
            })?;

        let commit = branch.get().peel_to_commit()?;
        snapshot(&commit)
    }

    fn has_branch(&self, name: &str) -> Result<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn merge_base(&self, a: &Commit, b: &Commit) -> Result<Commit> {
        let oid = self.repo.merge_base(a.id, b.id).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                ReleaseDateError::merge_base_not_found(a.short_id(), b.short_id())
            } else {
                e.into()
            }
        })?;

        self.lookup_commit(oid)
    }

    fn ancestry_from(&self, start: &Commit) -> Result<Ancestry<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(start.id)?;

        Ok(Box::new(revwalk.map(move |oid| {
            let oid = oid?;
            self.lookup_commit(oid)
        })))
    }

    fn all_tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for raw in names.iter_bytes() {
            let name = match std::str::from_utf8(raw) {
                Ok(name) => name,
                Err(_) => {
                    trace!(tag = %String::from_utf8_lossy(raw), "skipping tag with non UTF-8 name");
                    continue;
                }
            };

            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            // Peels through every annotated tag layer
            let object = reference.peel(ObjectType::Any)?;

            let target = match object.kind() {
                Some(ObjectType::Commit) => TagTarget::Commit(object.id()),
                kind => TagTarget::Other {
                    id: object.id(),
                    kind: kind.unwrap_or(ObjectType::Any),
                },
            };

            tags.push(Tag::new(name, target));
        }

        Ok(tags)
    }
}
