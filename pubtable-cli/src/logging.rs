//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Events go to stderr so that nothing mixes with generated output. `RUST_LOG`,
//! when set, takes precedence over the configured `logging.level`.
//!
//! # Log Levels
//!
//! - `warn`: skipped entries, unrecognized months
//! - `info`: run summary
//! - `debug`: one event per rendered entry and per year group

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(level: &str) -> Result<(), String> {
    let filter = build_env_filter(level)?;
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // A second subscriber cannot be installed; keep the first.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    Ok(())
}

/// Build an `EnvFilter` from the configured level, respecting `RUST_LOG`.
fn build_env_filter(level: &str) -> Result<EnvFilter, String> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| format!("Invalid log level '{level}': {err}")),
    }
}
