//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never interleave with host-tagged output on
//! stdout. `RD_LOG` takes precedence over `-v` flags.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count.
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8, no_color: bool) {
    let filter = EnvFilter::try_from_env("RD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .without_time()
        .try_init();
}
