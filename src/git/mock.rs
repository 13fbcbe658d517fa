use crate::error::{DevVersionError, Result};
use crate::git::{CommitId, Repository, TagRef};
use std::collections::{HashMap, HashSet};

/// In-memory commit graph for testing without a real repository
///
/// Tags are listed in insertion order, which lets tests control the iteration
/// order seen by the tag classifier.
pub struct MockRepository {
    parents: HashMap<CommitId, Vec<CommitId>>,
    tags: Vec<TagRef>,
    refs: HashMap<String, CommitId>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            parents: HashMap::new(),
            tags: Vec::new(),
            refs: HashMap::new(),
        }
    }

    /// Add a commit with its ordered parents, returning its id
    pub fn add_commit(&mut self, hash: &str, parents: &[&str]) -> CommitId {
        let id = CommitId::new(hash);
        self.parents
            .insert(id.clone(), parents.iter().map(|p| CommitId::new(*p)).collect());
        id
    }

    /// Add an annotated tag pointing at a commit
    pub fn add_annotated_tag(&mut self, name: impl Into<String>, commit: &CommitId) {
        self.tags.push(TagRef::annotated(name, commit.clone()));
    }

    /// Add a lightweight tag pointing at a commit
    pub fn add_lightweight_tag(&mut self, name: impl Into<String>, commit: &CommitId) {
        self.tags.push(TagRef::lightweight(name, commit.clone()));
    }

    /// Point a named reference (branch, `HEAD`) at a commit
    pub fn set_ref(&mut self, name: impl Into<String>, commit: &CommitId) {
        self.refs.insert(name.into(), commit.clone());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self.tags.clone())
    }

    fn resolve_commit(&self, spec: &str) -> Result<CommitId> {
        if let Some(id) = self.refs.get(spec) {
            return Ok(id.clone());
        }
        // Later tags with the same name shadow earlier ones
        if let Some(tag) = self.tags.iter().rev().find(|t| t.name == spec) {
            return Ok(tag.target.clone());
        }

        let id = CommitId::new(spec);
        if self.parents.contains_key(&id) {
            return Ok(id);
        }

        let mut matches = self
            .parents
            .keys()
            .filter(|c| !spec.is_empty() && c.as_str().starts_with(spec));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found.clone()),
            (Some(_), Some(_)) => Err(DevVersionError::reference(format!(
                "Ambiguous reference '{}'",
                spec
            ))),
            (None, _) => Err(DevVersionError::reference(format!(
                "Cannot resolve '{}' to a commit",
                spec
            ))),
        }
    }

    fn is_ancestor(&self, ancestor: &CommitId, descendant: &CommitId) -> Result<bool> {
        let mut pending = vec![descendant.clone()];
        let mut seen = HashSet::new();

        while let Some(current) = pending.pop() {
            if &current == ancestor {
                return Ok(true);
            }
            if !seen.insert(current.clone()) {
                continue;
            }
            pending.extend(self.parents(&current)?);
        }

        Ok(false)
    }

    fn parents(&self, commit: &CommitId) -> Result<Vec<CommitId>> {
        self.parents.get(commit).cloned().ok_or_else(|| {
            DevVersionError::reference(format!("Unknown commit: {}", commit))
        })
    }
}
