//! Logging setup
//!
//! Diagnostics go to stderr so they never mix with report output on stdout.

use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` if set and valid, else `fallback`
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber; later calls are ignored
pub fn init(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
