//! Tracing setup.
//!
//! Events go to stderr so stdout stays clean for hashes and JSON output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Initialize the tracing subscriber from `PASSKEEP_LOG`.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {}", e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to init tracing: {}", e))
}
