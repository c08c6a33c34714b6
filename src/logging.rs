//! Tracing subscriber setup for the command line tool

use crate::error::{ReleaseDateError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` wins over `default_level`.
pub fn env_filter(default_level: &str, verbose: bool) -> Result<EnvFilter> {
    if verbose {
        return Ok(EnvFilter::new("debug"));
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            ReleaseDateError::config(format!("Invalid log level '{}': {}", default_level, e))
        }),
    }
}

/// Install a stderr `fmt` subscriber as the global default
pub fn init(default_level: &str, verbose: bool) -> Result<()> {
    let filter = env_filter(default_level, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ReleaseDateError::config(format!("Failed to set tracing subscriber: {}", e)))
}
