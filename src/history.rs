//! Rendering of commit history entries
//!
//! Every commit becomes a markdown bullet. Pull-request references such as
//! `(#12)` at the end of a line are turned into links when the repository's
//! first remote is hosted on GitHub.

use crate::git::{CommitInfo, Remote};
use regex::{Captures, Regex};

const GITHUB_SSH: &str = "git@github.com:";
const GITHUB_HTTPS: &str = "https://github.com";

/// Render one commit as a history entry.
///
/// The entry is `<prefix>* <short hash> <message>` followed by an empty line
/// carrying only the prefix. Continuation lines of the message are indented
/// by two spaces so they sit under the bullet, and every line starts with
/// `line_prefix`.
pub fn format_entry(commit: &CommitInfo, line_prefix: &str) -> String {
    let message = commit
        .message
        .strip_suffix('\n')
        .unwrap_or(&commit.message)
        .replace('\n', "\n  ");

    let mut entry = format!("{}* {} {}\n", line_prefix, commit.short_hash(), message);
    if !line_prefix.is_empty() {
        entry = entry.replace('\n', &format!("\n{}", line_prefix));
    }
    entry.push('\n');
    entry
}

/// Base URL of the GitHub repository behind a remote URL
///
/// # Example
/// ```
/// # use git_semver::history::github_base_url;
/// assert_eq!(
///     github_base_url("git@github.com:foo/bar.git").as_deref(),
///     Some("https://github.com/foo/bar")
/// );
/// assert_eq!(github_base_url("git@example.com:foo/bar.git"), None);
/// ```
pub fn github_base_url(url: &str) -> Option<String> {
    if let Some(path) = url.strip_prefix(GITHUB_SSH) {
        let path = path.strip_suffix(".git").unwrap_or(path);
        return Some(format!("{}/{}", GITHUB_HTTPS, path));
    }

    if url.starts_with(GITHUB_HTTPS) {
        let url = url.trim_end_matches('/');
        return Some(url.strip_suffix(".git").unwrap_or(url).to_string());
    }

    None
}

/// Rewrites `(#N)` references into links to `<base>/pull/N`
#[derive(Debug, Clone)]
pub struct PullRequestLinker {
    base_url: String,
    pattern: Regex,
}

impl PullRequestLinker {
    pub fn new(base_url: impl Into<String>) -> Option<Self> {
        let pattern = Regex::new(r"\(#([0-9]+)\)($|\n)").ok()?;

        Some(PullRequestLinker {
            base_url: base_url.into(),
            pattern,
        })
    }

    /// Linker for the first URL of the first remote, if it is a GitHub remote
    pub fn from_remotes(remotes: &[Remote]) -> Option<Self> {
        let url = remotes.first()?.urls.first()?;
        PullRequestLinker::new(github_base_url(url)?)
    }

    /// Replace references that end the text or a line
    pub fn link(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                format!(
                    "[(#{number})]({base}/pull/{number}){end}",
                    number = &caps[1],
                    base = self.base_url,
                    end = &caps[2],
                )
            })
            .into_owned()
    }
}

/// Link pull-request references in `text` using the repository's remotes
///
/// Text is returned unchanged when there is no remote or the first remote is
/// not hosted on GitHub.
pub fn insert_pull_request_url(text: &str, remotes: &[Remote]) -> String {
    match PullRequestLinker::from_remotes(remotes) {
        Some(linker) => linker.link(text),
        None => text.to_string(),
    }
}
