//! Diagnostic logging to stderr.
//!
//! Report lines go to stdout; everything here goes to stderr so the two
//! never interleave in a pipe.

use crate::config::{OutputConfig, LOG_ENV};
use tracing_subscriber::EnvFilter;

/// Build the filter from `MINIGAMES_LOG`, falling back to the level implied
/// by `--verbose`.
pub fn env_filter(config: &OutputConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &OutputConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.color)
        .try_init();
}
