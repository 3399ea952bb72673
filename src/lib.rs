pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod scanner;
pub mod telemetry;
pub mod ui;

pub use error::{GitSemverError, Result, VersionError};
