use crate::error::{DevVersionError, Result};
use crate::git::{CommitId, TagRef};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository at `path` (working copy or bare)
    ///
    /// Parent directories are not searched, so a directory nested inside
    /// another checkout is not mistaken for that checkout.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn oid(commit: &CommitId) -> Result<Oid> {
        Oid::from_str(commit.as_str())
            .map_err(|e| DevVersionError::reference(format!("Invalid commit id '{}': {}", commit, e)))
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let tag_names = self.repo.tag_names(None)?;
        let mut names: Vec<&str> = tag_names.iter().flatten().collect();
        names.sort_unstable();

        let mut tags = Vec::with_capacity(names.len());
        for name in names {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            // Annotated tags point at a tag object, lightweight ones straight at the commit
            let annotated = reference
                .target()
                .map(|oid| self.repo.find_tag(oid).is_ok())
                .unwrap_or(false);

            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRef {
                    name: name.to_string(),
                    target: CommitId::new(commit.id().to_string()),
                    annotated,
                }),
                Err(e) => log::debug!("Skipping tag '{}' without a commit target: {}", name, e),
            }
        }

        Ok(tags)
    }

    fn resolve_commit(&self, spec: &str) -> Result<CommitId> {
        let object = self
            .repo
            .revparse_single(spec)
            .map_err(|e| DevVersionError::reference(format!("Cannot resolve '{}': {}", spec, e)))?;

        let commit = object.peel_to_commit().map_err(|e| {
            DevVersionError::reference(format!("'{}' does not name a commit: {}", spec, e))
        })?;

        Ok(CommitId::new(commit.id().to_string()))
    }

    fn is_ancestor(&self, ancestor: &CommitId, descendant: &CommitId) -> Result<bool> {
        let ancestor = Self::oid(ancestor)?;
        let descendant = Self::oid(descendant)?;

        if ancestor == descendant {
            return Ok(true);
        }

        Ok(self.repo.graph_descendant_of(descendant, ancestor)?)
    }

    fn parents(&self, commit: &CommitId) -> Result<Vec<CommitId>> {
        let commit = self.repo.find_commit(Self::oid(commit)?)?;

        Ok(commit
            .parent_ids()
            .map(|oid| CommitId::new(oid.to_string()))
            .collect())
    }
}
