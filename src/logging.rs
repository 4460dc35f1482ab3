//! Structured logging with `tracing`
//!
//! The library only emits events; installing a subscriber is left to the
//! binary or to a test that wants to see them.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber on stderr
///
/// `RUST_LOG` overrides `level` when set. Only the first call installs a
/// subscriber; later calls are no-ops.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails if a global subscriber is already set
    let _ = subscriber.try_init();
}

/// Level used by the binary for a given verbosity
pub fn level_for(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
