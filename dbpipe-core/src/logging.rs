//! Logging setup for the dbpipe binary.
//!
//! Log output goes to stderr; stdout is reserved for the generated command.
//! `RUST_LOG` directives, when set, override the verbosity flags.

use crate::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Maps CLI verbosity flags to a log level.
///
/// `quiet` wins over `verbose`; 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE.
pub const fn level_for(verbose: u8, quiet: bool) -> tracing::Level {
    match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, 2) => tracing::Level::DEBUG,
        (false, _) => tracing::Level::TRACE,
    }
}

/// Builds the log filter from verbosity flags and optional `RUST_LOG` directives.
///
/// Invalid directives are skipped; the flag-derived level stays the default.
pub fn filter_for(verbose: u8, quiet: bool, directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbose, quiet)).into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Initializes structured logging on stderr based on verbosity level.
///
/// # Arguments
/// * `verbose` - Verbosity level (0=WARN, 1=INFO, 2=DEBUG, 3+=TRACE)
/// * `quiet` - If true, only show ERROR level logs
///
/// # Errors
/// Returns error if a global subscriber is already installed
///
/// # Example
/// ```rust,no_run
/// use dbpipe_core::logging::init_logging;
///
/// init_logging(2, false)?;
/// # Ok::<(), dbpipe_core::DbPipeError>(())
/// ```
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose, quiet, directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| {
            crate::error::DbPipeError::configuration(format!(
                "Failed to initialize logging: {}",
                e
            ))
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Logging can only be initialized once per test process,
    // so only the level mapping is exercised here.

    #[test]
    fn test_verbosity_levels() {
        let test_cases = [
            ((true, 0), tracing::Level::ERROR),
            ((true, 5), tracing::Level::ERROR),
            ((false, 0), tracing::Level::WARN),
            ((false, 1), tracing::Level::INFO),
            ((false, 2), tracing::Level::DEBUG),
            ((false, 3), tracing::Level::TRACE),
            ((false, 10), tracing::Level::TRACE),
        ];

        for ((quiet, verbose), expected) in test_cases {
            assert_eq!(
                level_for(verbose, quiet),
                expected,
                "Failed for quiet={}, verbose={}",
                quiet,
                verbose
            );
        }
    }

    #[test]
    fn test_filter_defaults_to_flag_level() {
        assert_eq!(
            filter_for(0, false, None).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            filter_for(2, false, Some("")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_for(0, true, None).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_filter_directives_override_flags() {
        assert_eq!(
            filter_for(0, false, Some("trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
