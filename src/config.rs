use crate::domain::Version;
use crate::error::{GitSemverError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up at the root of the scanned repository
pub const REPO_CONFIG_FILE: &str = ".gitsemver.toml";

/// Directory under the user config dir holding `config.toml`
pub const USER_CONFIG_DIR: &str = "git-semver";

/// Settings a scan is opened with.
///
/// Built once from the merged file and command-line settings and handed to
/// [crate::scanner::Scanner::open] by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Prefix a tag must carry to be considered (e.g. `v`)
    pub prefix: String,
    /// Exclusive upper bound; tags at or above it are ignored
    pub below: Option<Version>,
    /// Whether `rc` prereleases take part in the highest-version selection
    pub include_release_candidates: bool,
}

/// Represents the configuration file for git-semver.
///
/// Every key is optional. Values given on the command line take precedence.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub below: Option<String>,

    #[serde(default)]
    pub release_candidates: bool,

    #[serde(default)]
    pub history: HistoryConfig,
}

/// Configuration for history rendering.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct HistoryConfig {
    /// Prepended to every line of rendered history
    #[serde(default)]
    pub line_prefix: String,
}

impl Config {
    /// Resolve the settings a scan needs
    ///
    /// # Returns
    /// * `Ok(ScanConfig)` - With `below` parsed as a strict version
    /// * `Err` - If `below` is not a valid version
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let below = match self.below.as_deref() {
            Some(below) if !below.is_empty() => Some(
                Version::parse(below)
                    .map_err(|e| GitSemverError::config(format!("below {:?}: {}", below, e)))?,
            ),
            _ => None,
        };

        Ok(ScanConfig {
            prefix: self.prefix.clone(),
            below,
            include_release_candidates: self.release_candidates,
        })
    }
}

/// User-level configuration file, if a config directory is known
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join("config.toml"))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.gitsemver.toml` at the root of `repo`
/// 3. `git-semver/config.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo: &Path) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if repo.join(REPO_CONFIG_FILE).exists() {
        repo.join(REPO_CONFIG_FILE)
    } else if let Some(path) = user_config_path().filter(|p| p.exists()) {
        path
    } else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|e| GitSemverError::config(format!("{}: {}", path.display(), e)))
}
