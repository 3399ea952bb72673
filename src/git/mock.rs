use crate::domain::tag::TAG_NAMESPACE;
use crate::error::{GitSemverError, Result};
use crate::git::{CommitInfo, CommitIter, Remote, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is linear: every commit has at most one parent.
pub struct MockRepository {
    commits: HashMap<Oid, (CommitInfo, Option<Oid>)>,
    tags: Vec<(String, Oid)>,
    head: Option<Oid>,
    remotes: Vec<Remote>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Vec::new(),
            head: None,
            remotes: Vec::new(),
        }
    }

    /// Add a commit on top of `parent` and move HEAD to it
    pub fn add_commit(&mut self, oid: Oid, message: impl Into<String>, parent: Option<Oid>) {
        let info = CommitInfo {
            id: oid,
            message: message.into(),
        };
        self.commits.insert(oid, (info, parent));
        self.head = Some(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: &str, oid: Oid) {
        self.tags.push((format!("{}{}", TAG_NAMESPACE, name), oid));
    }

    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.push(Remote {
            name: name.into(),
            urls: vec![url.into()],
        });
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<(String, Oid)>> {
        Ok(self.tags.clone())
    }

    fn resolve_tag(&self, name: &str) -> Result<Option<Oid>> {
        let reference = format!("{}{}", TAG_NAMESPACE, name);
        Ok(self
            .tags
            .iter()
            .find(|(tag, _)| *tag == reference)
            .map(|(_, oid)| *oid))
    }

    fn head(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| GitSemverError::head_not_found("reference 'refs/heads/main' not found"))
    }

    fn log_from(&self, from: Oid) -> Result<CommitIter<'_>> {
        if !self.commits.contains_key(&from) {
            return Err(git2::Error::from_str(&format!("commit {} not found", from)).into());
        }

        let walk = std::iter::successors(self.commits.get(&from), move |(_, parent)| {
            parent.and_then(|parent| self.commits.get(&parent))
        });

        Ok(Box::new(
            walk.map(|(info, _)| -> Result<CommitInfo> { Ok(info.clone()) }),
        ))
    }

    fn remotes(&self) -> Result<Vec<Remote>> {
        Ok(self.remotes.clone())
    }
}
