//! Tracing setup for the roster binary.
//!
//! Usage:
//!   roster --debug ...              # Debug logging to console
//!   RUST_LOG=roster=trace roster    # Fine-grained log control

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize console tracing.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `debug`
/// enabled and `info` without.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
