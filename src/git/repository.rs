use crate::error::{GitSemverError, Result};
use crate::git::{CommitInfo, CommitIter, Remote};
use git2::{ErrorCode, Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository at `path`
    ///
    /// Parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitSemverError::RepositoryNotFound {
                    path: path.display().to_string(),
                }
            } else {
                GitSemverError::Git(e)
            }
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<(String, Oid)>> {
        let mut tags = Vec::new();

        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;
            let Some(name) = reference.name() else {
                continue;
            };

            // Tags of trees or blobs cannot be release tags
            match reference.peel_to_commit() {
                Ok(commit) => tags.push((name.to_string(), commit.id())),
                Err(e) => debug!(tag = name, error = %e, "tag does not point at a commit"),
            }
        }

        Ok(tags)
    }

    fn resolve_tag(&self, name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => Ok(Some(reference.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn head(&self) -> Result<Oid> {
        let head = self
            .repo
            .head()
            .map_err(|e| GitSemverError::head_not_found(e.message()))?;
        let commit = head
            .peel_to_commit()
            .map_err(|e| GitSemverError::head_not_found(e.message()))?;

        Ok(commit.id())
    }

    fn log_from(&self, from: Oid) -> Result<CommitIter<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(from)?;

        Ok(Box::new(revwalk.map(move |oid| -> Result<CommitInfo> {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            Ok(CommitInfo {
                id: oid,
                message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            })
        })))
    }

    fn remotes(&self) -> Result<Vec<Remote>> {
        let names = self.repo.remotes()?;
        let mut remotes = Vec::new();

        for name in names.iter().flatten() {
            let remote = self.repo.find_remote(name)?;
            remotes.push(Remote {
                name: name.to_string(),
                urls: remote.url().map(str::to_string).into_iter().collect(),
            });
        }

        // "origin" first if it exists, then the rest alphabetically
        remotes.sort_by(|a, b| {
            if a.name == "origin" {
                std::cmp::Ordering::Less
            } else if b.name == "origin" {
                std::cmp::Ordering::Greater
            } else {
                a.name.cmp(&b.name)
            }
        });

        Ok(remotes)
    }
}
