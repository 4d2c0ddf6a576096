//! Tracing subscriber initialization.
//!
//! Diagnostics go to stderr so they never mix with the journal views on
//! stdout. `RUST_LOG` wins when set; otherwise the level is `warn`, or
//! `debug` with `--verbose`.

use crate::config::LogFormat;
use crate::constants::{DEFAULT_LOG_LEVEL, VERBOSE_LOG_LEVEL};
use std::io;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive for a run.
fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_LOG_LEVEL);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed (for example by a
/// test harness), in which case the existing one is kept.
pub fn init(format: LogFormat, verbose: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(io::stderr)
        .with_target(false);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_ansi(false).try_init(),
    };
    result.is_ok()
}
