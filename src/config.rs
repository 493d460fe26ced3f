//! # Configuration
//!
//! Health aggregation settings loaded through the `config` crate. Every field has a default,
//! so an empty source yields a usable configuration. Environment variables prefixed with
//! `HEALTH_` override file values; nested keys use a double underscore, e.g.
//! `HEALTH_SYSTEM__MEMORY_WARN_MIB=256`.
//!
//! ```rust,no_run
//! use health_aggregator::config::HealthConfig;
//!
//! # fn example() -> health_aggregator::Result<()> {
//! let config = HealthConfig::load_from_file("config/health.toml")?;
//! println!("provider timeout: {:?}", config.provider_timeout());
//! # Ok(())
//! # }
//! ```

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::{HealthError, Result};

pub const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 5_000;
const ENV_PREFIX: &str = "HEALTH";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Upper bound on a single provider's probe (milliseconds)
    pub provider_timeout_ms: u64,
    pub system: SystemProbeConfig,
}

/// Thresholds for the built-in runtime provider
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemProbeConfig {
    /// Register the `system` provider during bootstrap
    pub enabled: bool,
    /// Resident memory above which the memory check warns (MiB)
    pub memory_warn_mib: u64,
    /// Live async task count above which the task check warns
    pub task_warn_threshold: usize,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            provider_timeout_ms: DEFAULT_PROVIDER_TIMEOUT_MS,
            system: SystemProbeConfig::default(),
        }
    }
}

impl Default for SystemProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            memory_warn_mib: 128,
            task_warn_threshold: 100,
        }
    }
}

impl HealthConfig {
    /// Load from `HEALTH_*` environment variables only
    pub fn load() -> Result<Self> {
        Self::build(Config::builder())
    }

    /// Load from a file (format inferred from the extension), then apply environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading health configuration");
        Self::build(Config::builder().add_source(File::from(path)))
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config: HealthConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.provider_timeout_ms == 0 {
            return Err(HealthError::InvalidConfiguration(
                "provider_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.system.memory_warn_mib == 0 {
            return Err(HealthError::InvalidConfiguration(
                "system.memory_warn_mib must be greater than zero".to_string(),
            ));
        }
        if self.system.task_warn_threshold == 0 {
            return Err(HealthError::InvalidConfiguration(
                "system.task_warn_threshold must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_millis(self.provider_timeout_ms)
    }
}
