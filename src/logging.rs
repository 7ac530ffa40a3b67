//! Structured logging setup.
//!
//! The engine itself only emits `tracing` events; embedding applications
//! call [`init_logging`] once to install a subscriber.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Env var that forces JSON output regardless of config.
pub const JSON_ENV_VAR: &str = "PARLAY_LOG_JSON";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `cfg.filter`. Returns `false` when a subscriber was
/// already installed (e.g. by another test), which is not an error.
pub fn init_logging(cfg: &LoggingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.filter));

    let json_logging = cfg.json || std::env::var(JSON_ENV_VAR).is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .try_init()
            .is_ok()
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
            .is_ok()
    }
}
