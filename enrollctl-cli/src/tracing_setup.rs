//! Tracing setup for the enrollctl CLI
//!
//! Usage:
//!   enrollctl --debug ...                       # Debug logging to console
//!   RUST_LOG=enrollctl_server=debug enrollctl   # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                                    # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the default level to debug if RUST_LOG is not set)
    pub debug: bool,
}

impl TracingConfig {
    fn default_filter(&self) -> EnvFilter {
        let level = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

/// Initialize tracing with compact console output
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.default_filter())
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
