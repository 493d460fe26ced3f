#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Health Aggregator
//!
//! Health-check aggregation engine for services running under an orchestrator.
//!
//! ## Overview
//!
//! Subsystems register [`HealthProvider`] implementations with a [`HealthService`]. Each of
//! the three probe kinds (startup, readiness, liveness) visits every provider under a bounded
//! timeout, tolerates individual provider failures, and reduces all observations to one
//! worst-case [`Status`] that a probe endpoint can report.
//!
//! ## Module Organization
//!
//! - [`health`] - Provider contract, probe context, result model and the aggregation service
//! - [`config`] - Configuration loading
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use health_aggregator::config::HealthConfig;
//! use health_aggregator::health::{HealthService, ProbeContext};
//!
//! # async fn example() -> health_aggregator::Result<()> {
//! health_aggregator::logging::init_structured_logging();
//!
//! let config = HealthConfig::load()?;
//! let service = HealthService::bootstrap(&config, Vec::new());
//!
//! let result = service.check_liveness(&ProbeContext::new()).await;
//! println!("liveness: {}", result.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod health;
pub mod logging;

pub use crate::config::{HealthConfig, SystemProbeConfig};
pub use error::{HealthError, ProbeError, Result};
pub use health::{
    CheckDetail, CheckResult, Checks, HealthProvider, HealthService, ProbeContext, ProbeKind,
    Status,
};
