//! Logging bootstrap for applications using the client.
//!
//! The library itself only emits `tracing` events. Applications that have
//! no subscriber of their own can call [`init_logging`].

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `kibana_client=trace`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a formatting subscriber filtered by `LOG_LEVEL` (default `info`).
///
/// Does nothing when a global subscriber is already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init();
}
