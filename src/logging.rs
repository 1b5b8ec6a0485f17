//! Process-wide log output.
//!
//! Progress, warnings, and errors are written to stderr through
//! `tracing-subscriber`. `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "prtally=info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
