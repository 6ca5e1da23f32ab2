//! Logging setup for the `seqflow` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the application. `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "seqflow=warn",
        1 => "seqflow=info",
        2 => "seqflow=debug",
        _ => "seqflow=trace",
    }
}

/// Install a stderr `fmt` subscriber.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
