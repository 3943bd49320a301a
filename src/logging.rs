//! Diagnostic logging
//!
//! User-facing progress is printed directly. This subscriber only carries
//! diagnostics, filtered by `ANTA_LOG` (e.g. `ANTA_LOG=create_anta_app=trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "ANTA_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `verbose` lowers the default level from `warn` to `debug` when `ANTA_LOG`
/// is not set. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber already installed (e.g. by a test harness) wins
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}
