//! Real repositories for integration tests
#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature, Time};
use std::path::Path;
use tempfile::TempDir;

const BASE_TIME: i64 = 1_600_000_000;

pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: std::cell::Cell<i64>,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        TestRepo {
            dir,
            repo,
            clock: std::cell::Cell::new(BASE_TIME),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'static> {
        // One minute apart so time ordering is unambiguous
        let time = self.clock.get() + 60;
        self.clock.set(time);
        Signature::new("Test User", "test@example.com", &Time::new(time, 0)).unwrap()
    }

    /// Commit an empty tree on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let signature = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parents: Vec<Commit> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => Vec::new(),
        };
        let parents: Vec<&Commit> = parents.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap()
    }

    pub fn tag(&self, name: &str, target: Oid) {
        self.repo
            .reference(&format!("refs/tags/{}", name), target, false, "tag")
            .unwrap();
    }

    pub fn annotated_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        let signature = self.signature();
        self.repo
            .tag(name, &object, &signature, &format!("Release {}", name), false)
            .unwrap();
    }

    pub fn remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }

    pub fn head(&self) -> Oid {
        self.repo.head().unwrap().peel_to_commit().unwrap().id()
    }
}

/// Commits of [release_repo], oldest first
pub struct ReleaseCommits {
    pub initial: Oid,
    pub parser: Oid,
    pub fix: Oid,
    pub history: Oid,
    pub links: Oid,
}

/// Linear history tagged `v0.0.1`, `v0.0.2` (annotated) and `v0.0.3-rc1`,
/// plus tags that are not strict versions.
pub fn release_repo() -> (TestRepo, ReleaseCommits) {
    let repo = TestRepo::new();

    let initial = repo.commit("Initial commit\n");
    repo.tag("v0.0.1", initial);

    let parser = repo.commit("Add parser\n");
    repo.tag("release-1.0.0", parser);

    let fix = repo.commit("Fix parser (#2)\n");
    repo.annotated_tag("v0.0.2", fix);

    let history = repo.commit("Add history\n\nWalks the log.\n");
    repo.tag("v0.0.3-rc1", history);

    let links = repo.commit("Link pull requests (#7)\n");
    repo.tag("latest", links);
    repo.tag("v1.0", links);

    let commits = ReleaseCommits {
        initial,
        parser,
        fix,
        history,
        links,
    };
    (repo, commits)
}

pub fn short(oid: Oid) -> String {
    oid.to_string()[..7].to_string()
}
