//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber with a formatted stderr writer.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Logs go to stderr so the shim's stdout stays clean for output.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
