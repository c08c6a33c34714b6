#![allow(dead_code)]

use git2::{ObjectType, Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Throwaway git repository whose commits all share the empty tree
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo { dir, repo }
    }

    fn signature(seconds: i64, offset_minutes: i32) -> Signature<'static> {
        Signature::new(
            "Test User",
            "test@example.com",
            &Time::new(seconds, offset_minutes),
        )
        .expect("Could not create signature")
    }

    pub fn empty_tree(&self) -> Oid {
        self.repo
            .treebuilder(None)
            .expect("Could not create tree builder")
            .write()
            .expect("Could not write tree")
    }

    /// Commit on `branch` (created or moved) at the given time
    pub fn commit_at(&self, branch: &str, parents: &[Oid], seconds: i64, message: &str) -> Oid {
        self.commit_with_offset(branch, parents, seconds, 0, message)
    }

    pub fn commit_with_offset(
        &self,
        branch: &str,
        parents: &[Oid],
        seconds: i64,
        offset_minutes: i32,
        message: &str,
    ) -> Oid {
        let sig = Self::signature(seconds, offset_minutes);
        let tree = self
            .repo
            .find_tree(self.empty_tree())
            .expect("Could not find tree");
        let parents: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|p| self.repo.find_commit(*p).expect("Could not find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        let oid = self
            .repo
            .commit(None, &sig, &sig, message, &tree, &parent_refs)
            .expect("Could not create commit");
        self.set_branch(branch, oid);
        oid
    }

    pub fn set_branch(&self, branch: &str, oid: Oid) {
        self.repo
            .reference(&format!("refs/heads/{}", branch), oid, true, "test")
            .expect("Could not update branch");
    }

    pub fn lightweight_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag(name, &object, &Self::signature(0, 0), "release", false)
            .expect("Could not create annotated tag");
    }

    pub fn tree_tag(&self, name: &str) {
        let tree = self
            .repo
            .find_object(self.empty_tree(), Some(ObjectType::Tree))
            .expect("Could not find tree");
        self.repo
            .tag_lightweight(name, &tree, false)
            .expect("Could not tag tree");
    }
}
