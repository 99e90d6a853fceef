//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

/// Environment variable read by [`init_tracing`].
pub const LOG_ENV_VAR: &str = "TOKEBI_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TOKEBI_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

/// Filter matching the host's debug switch: chatty in debug mode, warnings
/// only otherwise.
pub fn default_filter(debug_mode: bool) -> &'static str {
    if debug_mode {
        "tokebi=debug"
    } else {
        "tokebi=warn"
    }
}
