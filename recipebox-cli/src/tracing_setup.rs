//! Tracing setup for the recipebox CLI
//!
//! Usage:
//!   recipebox --debug run ...              # Debug logging to console
//!   RUST_LOG=recipebox_server=debug ...    # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_failure() {
        let config = TracingConfig::default();
        // The first call may lose to another test's subscriber; the second never wins
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
