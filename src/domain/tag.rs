use git2::{ObjectType, Oid};

/// What a tag resolves to once every annotated tag layer has been peeled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTarget {
    Commit(Oid),
    /// A tree, blob or any other non-commit object
    Other { id: Oid, kind: ObjectType },
}

impl TagTarget {
    /// Object id of the peeled target, whatever its kind
    pub fn id(&self) -> Oid {
        match self {
            TagTarget::Commit(id) => *id,
            TagTarget::Other { id, .. } => *id,
        }
    }
}

/// Represents a git tag together with its peeled target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: TagTarget,
}

impl Tag {
    pub fn new(name: impl Into<String>, target: TagTarget) -> Self {
        Tag {
            name: name.into(),
            target,
        }
    }

    /// Tag pointing (possibly through annotated tags) at a commit
    pub fn on_commit(name: impl Into<String>, commit: Oid) -> Self {
        Tag::new(name, TagTarget::Commit(commit))
    }
}
