//! Diagnostic logging setup shared by the binaries.

use std::io;
use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "error" }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Diagnostics go to
/// stderr so they never mix with tool output. Calling this twice is a no-op.
pub fn init_tracing(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
