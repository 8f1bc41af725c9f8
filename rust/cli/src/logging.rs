//! Diagnostic logging setup.
//!
//! Engine and command diagnostics go through `tracing`; this installs the
//! subscriber that prints them to stderr so they never mix with game output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Environment variable holding a log filter for this tool.
pub const LOG_ENV: &str = "EXPEDITIONS_LOG";

/// Default filter when neither `EXPEDITIONS_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: `EXPEDITIONS_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn filter_from_env() -> EnvFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| EnvFilter::try_new(s).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the stderr subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let subscriber = fmt()
        .with_env_filter(filter_from_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    // a subscriber may already be installed (tests, embedding)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
