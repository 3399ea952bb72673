//! End-to-end tests of the git-semver binary against real repositories.

mod common;

use assert_cmd::Command;
use common::{release_repo, short, TestRepo};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command running in `repo` with no user configuration or log filter
fn git_semver(repo: &TestRepo, config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("git-semver").unwrap();
    cmd.arg("--repo")
        .arg(repo.path())
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("GIT_SEMVER_LOG");
    cmd
}

#[test]
fn test_version_command() {
    Command::cargo_bin("git-semver")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(format!("Version: {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_mentions_purpose() {
    Command::cargo_bin("git-semver")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("semantic versions based on git tags"));
}

#[test]
fn test_default_bumps_patch() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v"])
        .assert()
        .success()
        .stdout("v0.0.3\n");
}

#[test]
fn test_minor_without_patch() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "--minor", "--patch=false"])
        .assert()
        .success()
        .stdout("v0.1.0\n");
}

#[test]
fn test_major() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "--major"])
        .assert()
        .success()
        .stdout("v1.0.0\n");
}

#[test]
fn test_rc_continues_series() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "--rc"])
        .assert()
        .success()
        .stdout("v0.0.3-rc2\n");
}

#[test]
fn test_rc_starts_series_below_candidate() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "--rc", "--below", "v0.0.3-rc1", "--minor", "--patch=false"])
        .assert()
        .success()
        .stdout("v0.1.0-rc1\n");
}

#[test]
fn test_snapshot() {
    let (repo, commits) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "--snapshot"])
        .assert()
        .success()
        .stdout(format!("v0.0.3-snapshot-{}\n", short(commits.links)));
}

#[test]
fn test_current() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["current", "--prefix", "v"])
        .assert()
        .success()
        .stdout("v0.0.2\n");
}

#[test]
fn test_history_with_message_prefix() {
    let (repo, commits) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["history", "--prefix", "v", "--msg-prefix", "> "])
        .assert()
        .success()
        .stdout(format!(
            "> * {} Link pull requests (#7)\n> \n\
             > * {} Add history\n>   \n>   Walks the log.\n> \n",
            short(commits.links),
            short(commits.history)
        ));
}

#[test]
fn test_repository_config_file() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();
    fs::write(
        repo.path().join(".gitsemver.toml"),
        "prefix = \"v\"\nrelease_candidates = true\n",
    )
    .unwrap();

    git_semver(&repo, &home)
        .arg("current")
        .assert()
        .success()
        .stdout("v0.0.3-rc1\n");
}

#[test]
fn test_rc_false_overrides_config_file() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();
    fs::write(
        repo.path().join(".gitsemver.toml"),
        "prefix = \"v\"\nrelease_candidates = true\n",
    )
    .unwrap();

    git_semver(&repo, &home)
        .args(["current", "--rc=false"])
        .assert()
        .success()
        .stdout("v0.0.2\n");

    git_semver(&repo, &home)
        .arg("--rc=false")
        .assert()
        .success()
        .stdout("v0.0.3\n");
}

#[test]
fn test_flags_override_config_file() {
    let (repo, commits) = release_repo();
    let home = TempDir::new().unwrap();
    repo.tag("2.0.0", commits.parser);
    fs::write(repo.path().join(".gitsemver.toml"), "prefix = \"v\"\n").unwrap();

    git_semver(&repo, &home)
        .args(["current", "--prefix", ""])
        .assert()
        .success()
        .stdout("2.0.0\n");
}

#[test]
fn test_verbose_reports_change_on_stderr() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--prefix", "v", "-v"])
        .assert()
        .success()
        .stdout("v0.0.3\n")
        .stderr(predicate::str::contains("v0.0.2 → v0.0.3"));
}

#[test]
fn test_missing_repository_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("does-not-exist");

    Command::cargo_bin("git-semver")
        .unwrap()
        .arg("--repo")
        .arg(&missing)
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("repository does not exist"));
}

#[test]
fn test_invalid_below_fails() {
    let (repo, _) = release_repo();
    let home = TempDir::new().unwrap();

    git_semver(&repo, &home)
        .args(["--below", "1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Major.Minor.Patch elements found"));
}
