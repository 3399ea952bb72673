//! Command workflows
//!
//! Each workflow loads the configuration, layers the command-line settings
//! over it, opens the repository and runs one scanner operation. Keeping this
//! out of main.rs lets the workflows run without clap.

use std::path::PathBuf;

use tracing::info;

use crate::config::{load_config, Config};
use crate::domain::Version;
use crate::error::Result;
use crate::git::Git2Repository;
use crate::scanner::{Bump, Scanner};

/// Settings given on the command line
///
/// `None` leaves the configuration file value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub below: Option<String>,
    pub release_candidates: Option<bool>,
    pub line_prefix: Option<String>,
}

impl Overrides {
    /// Layer these settings over `config`
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(below) = &self.below {
            config.below = Some(below.clone());
        }
        if let Some(release_candidates) = self.release_candidates {
            config.release_candidates = release_candidates;
        }
        if let Some(line_prefix) = &self.line_prefix {
            config.history.line_prefix = line_prefix.clone();
        }
        config
    }
}

/// Where to look and what to override
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Path to the git repository
    pub repo: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    pub overrides: Overrides,
}

impl WorkflowArgs {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        WorkflowArgs {
            repo: repo.into(),
            config_path: None,
            overrides: Overrides::default(),
        }
    }
}

/// Result of the increment workflow
#[derive(Debug, Clone, PartialEq)]
pub struct VersionChange {
    /// Highest tagged version the increment started from
    pub highest: Version,
    pub next: Version,
}

/// Load the merged configuration and open the scanner
pub fn open(args: &WorkflowArgs) -> Result<(Config, Scanner<Git2Repository>)> {
    let config = load_config(args.config_path.as_deref(), &args.repo)?;
    let config = args.overrides.apply(config);
    let scanner = Scanner::open(&args.repo, config.scan_config()?)?;

    info!(highest = %scanner.highest(), repo = %args.repo.display(), "opened repository");
    Ok((config, scanner))
}

/// Compute the next version
///
/// Release candidates requested through the configuration are bumped as
/// well as included in the scan.
pub fn next_version(args: &WorkflowArgs, bump: Bump) -> Result<VersionChange> {
    let (config, scanner) = open(args)?;
    let bump = Bump {
        release_candidate: bump.release_candidate || config.release_candidates,
        ..bump
    };

    Ok(VersionChange {
        highest: scanner.highest().clone(),
        next: scanner.increment(bump)?,
    })
}

/// Highest version among the eligible tags
pub fn current_version(args: &WorkflowArgs) -> Result<Version> {
    let (_, scanner) = open(args)?;
    Ok(scanner.highest().clone())
}

/// History since the highest version, using the configured line prefix
pub fn history(args: &WorkflowArgs) -> Result<String> {
    let (config, scanner) = open(args)?;
    scanner.history(&config.history.line_prefix)
}
