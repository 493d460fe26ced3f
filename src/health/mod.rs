//! # Health Module
//!
//! Health-check aggregation: pluggable providers answer startup, readiness and liveness
//! probes, and [`HealthService`] folds their answers into one worst-case [`CheckResult`].
//!
//! ## Architecture
//!
//! ```text
//!   caller ──ProbeContext──► HealthService ──child ctx──► HealthProvider (× N, sequential)
//!                                 │                            │
//!                                 │◄──── Checks / ProbeError ──┘
//!                                 ▼
//!                            CheckResult  ("provider:check" → CheckDetail, status = max)
//! ```

pub mod context;
pub mod provider;
pub mod service;
pub mod system;
pub mod types;

pub use context::ProbeContext;
pub use provider::{HealthProvider, ProbeKind, ProbeResult};
pub use service::HealthService;
pub use system::SystemHealthProvider;
pub use types::{overall_status, CheckDetail, CheckResult, Checks, Status, StatusSummary};
