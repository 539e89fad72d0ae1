//! Logging bootstrap

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};

/// Install a `fmt` subscriber filtered by `RUST_LOG`, or by the configured
/// level when `RUST_LOG` is unset. A subscriber that is already installed is
/// left in place.
pub fn init(config: &AppConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| CoreError::Config(format!("invalid log level '{}': {}", config.log_level, e)))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = AppConfig::default();
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
    }
}
