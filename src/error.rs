//! # Error Types
//!
//! Two error families live here. [`ProbeError`] is what a provider hands back when its probe
//! could not run at all; the aggregation service absorbs it into the result and never raises
//! it to callers. [`HealthError`] covers the fallible ambient operations such as loading
//! configuration.

use thiserror::Error;

/// Failure of a single probe execution.
///
/// Distinct from a check reporting `fail`: an error means the inspection itself did not
/// happen, not that the inspected subsystem is unhealthy.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Execution(#[from] anyhow::Error),

    #[error("Probe timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Probe cancelled")]
    Cancelled,

    #[error("Probe target unavailable: {reason}")]
    Unavailable { reason: String },
}

impl ProbeError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }
}

/// Crate-level error for configuration and other setup paths.
#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, HealthError>;
