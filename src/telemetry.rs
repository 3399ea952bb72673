//! Log output for the command-line tool
//!
//! Events go to stderr so that stdout only carries the computed version or
//! the rendered history.

use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `git_semver=debug`
pub const LOG_ENV_VAR: &str = "GIT_SEMVER_LOG";

/// Install the global subscriber.
///
/// `verbosity` is the number of `-v` flags and sets the default level;
/// a filter in [LOG_ENV_VAR] takes precedence.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_from_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_from_verbosity(2), LevelFilter::DEBUG);
        assert_eq!(level_from_verbosity(9), LevelFilter::DEBUG);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
