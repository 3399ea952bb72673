use std::fmt;

use thiserror::Error;

/// Numeric component of a version, used to name the failing part in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Major => write!(f, "major number"),
            Component::Minor => write!(f, "minor number"),
            Component::Patch => write!(f, "patch number"),
        }
    }
}

/// Errors produced while parsing, validating or incrementing a version.
///
/// The messages are part of the public contract: callers and tests match on
/// the exact wording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version string empty")]
    Empty,

    #[error("no Major.Minor.Patch elements found")]
    MissingComponents,

    #[error("invalid character(s) found in {component} {value:?}")]
    InvalidNumber { component: Component, value: String },

    #[error("{component} must not contain leading zeroes {value:?}")]
    LeadingZeroes { component: Component, value: String },

    #[error("{component} out of range {value:?}")]
    NumberOutOfRange { component: Component, value: String },

    #[error("prerelease is empty")]
    EmptyPreRelease,

    #[error("prerelease can not be empty {0:?}")]
    BlankPreRelease(String),

    #[error("numeric PreRelease version must not contain leading zeroes {0:?}")]
    PreReleaseLeadingZeroes(String),

    #[error("numeric PreRelease version out of range {0:?}")]
    PreReleaseOutOfRange(String),

    #[error("invalid character(s) found in prerelease {0:?}")]
    InvalidPreRelease(String),

    #[error("build meta data is empty")]
    EmptyBuild,

    #[error("buildversion is empty")]
    EmptyBuildIdentifier,

    #[error("build meta data can not be empty {0:?}")]
    BlankBuild(String),

    #[error("invalid character(s) found in build meta data {0:?}")]
    InvalidBuild(String),

    #[error("short version cannot contain PreRelease/Build meta data")]
    ShortVersionWithMetadata,

    #[error("cannot increment {0}: maximum value reached")]
    Overflow(Component),
}

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("open git repo {path}: repository does not exist")]
    RepositoryNotFound { path: String },

    #[error("get repo head: {0}")]
    HeadNotFound(String),

    #[error("parse rc number: {0:?}")]
    ReleaseCandidate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create a missing-HEAD error with context
    pub fn head_not_found(msg: impl Into<String>) -> Self {
        GitSemverError::HeadNotFound(msg.into())
    }
}
