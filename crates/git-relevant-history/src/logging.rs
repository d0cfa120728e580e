//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs the global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence, then `--verbose`, then the configured level.
/// Does nothing if a subscriber is already installed.
pub(crate) fn init(verbose: bool, config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(verbose, config));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn fallback_filter(verbose: bool, config: &LogConfig) -> EnvFilter {
    let level = if verbose { "debug" } else { config.level.as_str() };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
