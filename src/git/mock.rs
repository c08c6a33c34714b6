use crate::domain::{Commit, Tag, TagTarget};
use crate::error::{ReleaseDateError, Result};
use crate::git::{Ancestry, HistoryBackend};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use git2::Oid;
use std::cell::Cell;
use std::collections::{BTreeMap, BinaryHeap, HashMap, HashSet};

struct MockCommit {
    commit: Commit,
    parents: Vec<Oid>,
}

/// In-memory commit graph for testing without a real repository
pub struct MockRepository {
    commits: HashMap<Oid, MockCommit>,
    tags: BTreeMap<String, TagTarget>,
    branch_heads: HashMap<String, Oid>,
    walks: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: BTreeMap::new(),
            branch_heads: HashMap::new(),
            walks: Cell::new(0),
        }
    }

    /// Add a commit with the given parents
    pub fn add_commit(&mut self, commit: Commit, parents: &[Oid]) {
        self.commits.insert(
            commit.id,
            MockCommit {
                commit,
                parents: parents.to_vec(),
            },
        );
    }

    /// Add a commit made at `seconds` since the epoch, in UTC
    pub fn add_commit_at(&mut self, id: Oid, seconds: i64, parents: &[Oid]) {
        let timestamp: DateTime<FixedOffset> = Utc
            .timestamp_opt(seconds, 0)
            .single()
            .unwrap_or_default()
            .fixed_offset();
        self.add_commit(Commit::new(id, timestamp), parents);
    }

    /// Add a tag whose peeled target is `target`
    pub fn add_tag(&mut self, name: impl Into<String>, target: TagTarget) {
        self.tags.insert(name.into(), target);
    }

    /// Add a tag pointing at a commit
    pub fn tag_commit(&mut self, name: impl Into<String>, oid: Oid) {
        self.add_tag(name, TagTarget::Commit(oid));
    }

    /// Set a branch head
    pub fn set_branch_head(&mut self, branch: impl Into<String>, oid: Oid) {
        self.branch_heads.insert(branch.into(), oid);
    }

    /// Number of ancestry walks started so far
    pub fn ancestry_walks(&self) -> usize {
        self.walks.get()
    }

    fn node(&self, id: Oid) -> Result<&MockCommit> {
        self.commits
            .get(&id)
            .ok_or_else(|| ReleaseDateError::commit_not_found(id.to_string()))
    }

    /// `start` and everything reachable from it
    fn reachable(&self, start: Oid) -> Result<HashSet<Oid>> {
        let mut seen = HashSet::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(self.node(id)?.parents.iter().copied());
            }
        }

        Ok(seen)
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBackend for MockRepository {
    fn lookup_commit(&self, id: Oid) -> Result<Commit> {
        Ok(self.node(id)?.commit.clone())
    }

    fn branch_tip(&self, name: &str) -> Result<Commit> {
        let oid = self
            .branch_heads
            .get(name)
            .copied()
            .ok_or_else(|| ReleaseDateError::branch_not_found(name))?;
        self.lookup_commit(oid)
    }

    fn has_branch(&self, name: &str) -> Result<bool> {
        Ok(self.branch_heads.contains_key(name))
    }

    fn merge_base(&self, a: &Commit, b: &Commit) -> Result<Commit> {
        let from_a = self.reachable(a.id)?;
        let common: HashSet<Oid> = self
            .reachable(b.id)?
            .into_iter()
            .filter(|id| from_a.contains(id))
            .collect();

        // Drop every common ancestor that is behind another one
        let mut behind = HashSet::new();
        for id in &common {
            for parent in &self.node(*id)?.parents {
                behind.extend(self.reachable(*parent)?);
            }
        }

        common
            .iter()
            .filter(|id| !behind.contains(*id))
            .map(|id| &self.commits[id].commit)
            .max_by(|x, y| {
                x.timestamp
                    .cmp(&y.timestamp)
                    .then_with(|| y.id.cmp(&x.id))
            })
            .cloned()
            .ok_or_else(|| ReleaseDateError::merge_base_not_found(a.short_id(), b.short_id()))
    }

    fn ancestry_from(&self, start: &Commit) -> Result<Ancestry<'_>> {
        self.walks.set(self.walks.get() + 1);

        let members = self.reachable(start.id)?;
        let mut pending_children: HashMap<Oid, usize> = HashMap::new();
        for id in &members {
            for parent in &self.commits[id].parents {
                *pending_children.entry(*parent).or_default() += 1;
            }
        }

        let mut ready = BinaryHeap::new();
        let first = &self.commits[&start.id].commit;
        ready.push((first.timestamp, first.id));

        Ok(Box::new(MockWalk {
            repo: self,
            ready,
            pending_children,
        }))
    }

    fn all_tags(&self) -> Result<Vec<Tag>> {
        Ok(self
            .tags
            .iter()
            .map(|(name, target)| Tag::new(name.clone(), *target))
            .collect())
    }
}

/// Topological walk, newest ready commit first
struct MockWalk<'a> {
    repo: &'a MockRepository,
    ready: BinaryHeap<(DateTime<FixedOffset>, Oid)>,
    pending_children: HashMap<Oid, usize>,
}

impl Iterator for MockWalk<'_> {
    type Item = Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, id) = self.ready.pop()?;
        let node = &self.repo.commits[&id];

        for parent in &node.parents {
            if let Some(count) = self.pending_children.get_mut(parent) {
                *count -= 1;
                if *count == 0 {
                    let commit = &self.repo.commits[parent].commit;
                    self.ready.push((commit.timestamp, commit.id));
                }
            }
        }

        Some(Ok(node.commit.clone()))
    }
}
