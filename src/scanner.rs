//! Highest-version selection and next-version computation
//!
//! A [Scanner] reduces the version tags of a repository to the single highest
//! version allowed by its [ScanConfig], computes the next version from it and
//! renders the commits made since that version was tagged.

use crate::config::ScanConfig;
use crate::domain::{PreReleaseIdentifier, TagRecord, Version};
use crate::error::{GitSemverError, Result};
use crate::git::{short_hash, CommitInfo, Git2Repository, Repository};
use crate::history::{format_entry, PullRequestLinker};
use git2::Oid;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Which parts of the version to move forward
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bump {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    /// Replace the prerelease with `snapshot-<short HEAD hash>`
    pub snapshot: bool,
    /// Start or continue an `rc<N>` series
    pub release_candidate: bool,
}

/// Read-only view of a repository and its highest version tag
pub struct Scanner<R: Repository> {
    repo: R,
    highest: Version,
    config: ScanConfig,
}

impl Scanner<Git2Repository> {
    /// Open the repository at `path` and resolve its highest version
    pub fn open<P: AsRef<Path>>(path: P, config: ScanConfig) -> Result<Self> {
        let repo = Git2Repository::open(path)?;
        Scanner::from_repository(repo, config)
    }
}

impl<R: Repository> Scanner<R> {
    /// Resolve the highest version of any repository implementation
    pub fn from_repository(repo: R, config: ScanConfig) -> Result<Self> {
        let tags = repo.list_tags()?;
        let highest = resolve_highest(&tags, &config);

        Ok(Scanner {
            repo,
            highest,
            config,
        })
    }

    pub fn highest(&self) -> &Version {
        &self.highest
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Compute the next version from the highest one
    ///
    /// Steps are applied in a fixed order:
    /// 1. Release candidate: an existing `rc<N>` identifier becomes
    ///    `rc<N+1>` and the numeric bumps are dropped. Without one, the result
    ///    gets the prerelease `rc1` and the numeric bumps still apply.
    /// 2. Patch, then minor, then major.
    /// 3. Snapshot, which replaces any prerelease.
    ///
    /// The highest version itself is left untouched.
    ///
    /// # Errors
    /// * `ReleaseCandidate` - An `rc` identifier has no number after it
    /// * `Version` - A component would overflow
    /// * `HeadNotFound` - A snapshot was requested without a HEAD commit
    pub fn increment(&self, bump: Bump) -> Result<Version> {
        let mut bump = bump;
        let mut next = self.highest.clone();
        let mut new_series = false;

        if bump.release_candidate {
            match next
                .prerelease
                .iter()
                .position(PreReleaseIdentifier::is_release_candidate)
            {
                Some(index) => {
                    next.prerelease[index] = next_release_candidate(&next.prerelease[index])?;
                    bump.major = false;
                    bump.minor = false;
                    bump.patch = false;
                }
                None => new_series = true,
            }
        }

        if bump.patch {
            next = next.increment_patch()?;
        }
        if bump.minor {
            next = next.increment_minor()?;
        }
        if bump.major {
            next = next.increment_major()?;
        }

        if new_series {
            next.prerelease = vec![PreReleaseIdentifier::release_candidate(1)];
        }

        if bump.snapshot {
            let head = self.repo.head()?;
            let snapshot = PreReleaseIdentifier::parse(&format!("snapshot-{}", short_hash(head)))?;
            next.prerelease = vec![snapshot];
        }

        debug!(from = %self.highest, to = %next, ?bump, "incremented version");
        Ok(next)
    }

    /// Render the commits made since the highest version was tagged
    ///
    /// Walks from HEAD, most recent first, and stops at the commit the tag
    /// points at. When the tag does not exist the whole history is rendered.
    /// Every line of the result starts with `line_prefix`.
    pub fn history(&self, line_prefix: &str) -> Result<String> {
        let head = self.repo.head()?;
        let tag = self.highest.to_string();

        let boundary = match self.repo.resolve_tag(&tag)? {
            Some(target) => self.repo.log_from(target)?.next().transpose()?.map(|c| c.id),
            None => {
                warn!("Tag {} not found, including the entire history", tag);
                None
            }
        };

        let linker = match self.repo.remotes() {
            Ok(remotes) => PullRequestLinker::from_remotes(&remotes),
            Err(e) => {
                debug!(error = %e, "could not list remotes, pull requests will not be linked");
                None
            }
        };

        let mut history = String::new();
        let mut count = 0;

        for commit in self
            .repo
            .log_from(head)?
            .take_while(|commit| before_boundary(commit, boundary))
        {
            let entry = format_entry(&commit?, line_prefix);
            match &linker {
                Some(linker) => history.push_str(&linker.link(&entry)),
                None => history.push_str(&entry),
            }
            count += 1;
        }

        debug!(commits = count, since = %tag, "rendered history");
        Ok(history)
    }
}

fn before_boundary(commit: &Result<CommitInfo>, boundary: Option<Oid>) -> bool {
    match (commit, boundary) {
        (Ok(commit), Some(boundary)) => commit.id != boundary,
        _ => true,
    }
}

fn next_release_candidate(current: &PreReleaseIdentifier) -> Result<PreReleaseIdentifier> {
    let number = current
        .release_candidate_number()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| GitSemverError::ReleaseCandidate(current.to_string()))?;

    Ok(PreReleaseIdentifier::release_candidate(number))
}

/// Reduce tag references to the highest version allowed by `config`
///
/// Tags that are not strict versions or carry another prefix are skipped.
/// The fold starts from `0.0.0` with the configured prefix, so a repository
/// without eligible tags yields that zero version.
pub fn resolve_highest(tags: &[(String, Oid)], config: &ScanConfig) -> Version {
    let mut highest = Version::with_prefix(config.prefix.clone());
    let mut release_lines: HashMap<String, Version> = HashMap::new();

    for (reference, target) in tags {
        let tag = match TagRecord::parse(reference, *target) {
            Ok(tag) => tag,
            Err(e) => {
                trace!(tag = %reference, error = %e, "skipping non-version tag");
                continue;
            }
        };

        if tag.version.prefix != config.prefix {
            trace!(
                tag = %tag.name,
                target = %short_hash(tag.target),
                "skipping tag with other prefix"
            );
            continue;
        }

        release_lines
            .entry(tag.release_line())
            .and_modify(|kept| {
                if tag.version.gt(kept) {
                    *kept = tag.version.clone();
                }
            })
            .or_insert_with(|| tag.version.clone());

        if is_candidate(&tag.version, config) && tag.version.gt(&highest) {
            trace!(tag = %tag.name, target = %short_hash(tag.target), "new highest version");
            highest = tag.version;
        }
    }

    debug!(
        tags = tags.len(),
        release_lines = release_lines.len(),
        highest = %highest,
        "resolved highest version"
    );
    highest
}

/// Whether a version may be chosen as the highest
///
/// Prereleases qualify only as release candidates and only when they are
/// included. A configured `below` bound is exclusive.
pub fn is_candidate(version: &Version, config: &ScanConfig) -> bool {
    if let Some(first) = version.prerelease.first() {
        if !config.include_release_candidates || !first.is_release_candidate() {
            return false;
        }
    }

    match &config.below {
        Some(below) => !version.gte(below),
        None => true,
    }
}
