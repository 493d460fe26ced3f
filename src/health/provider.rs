//! # Health Provider Contract
//!
//! Every health source implements [`HealthProvider`]: a stable name plus one probe per
//! [`ProbeKind`]. Probes return the checks they observed, or a [`ProbeError`] when the probe
//! could not execute at all.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::context::ProbeContext;
use super::types::Checks;
use crate::error::ProbeError;

pub type ProbeResult = std::result::Result<Checks, ProbeError>;

/// The three "is this OK" questions a provider can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    Startup,
    Readiness,
    Liveness,
}

impl ProbeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Startup => "startup",
            ProbeKind::Readiness => "readiness",
            ProbeKind::Liveness => "liveness",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable source of health checks for one subsystem.
///
/// Probes must not mutate shared state. A probe with nothing to report returns an empty
/// [`Checks`]; the default implementations do exactly that, so providers only override the
/// kinds they care about. The context carries cancellation and the per-provider deadline;
/// long-running probes should watch [`ProbeContext::cancelled`].
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Namespace prefix for every check this provider contributes
    fn name(&self) -> &str;

    /// Has the subsystem finished starting?
    async fn probe_startup(&self, _ctx: &ProbeContext) -> ProbeResult {
        Ok(Checks::new())
    }

    /// Can the subsystem take traffic?
    async fn probe_readiness(&self, _ctx: &ProbeContext) -> ProbeResult {
        Ok(Checks::new())
    }

    /// Is the subsystem still functioning?
    async fn probe_liveness(&self, _ctx: &ProbeContext) -> ProbeResult {
        Ok(Checks::new())
    }

    /// Route to the per-kind probe. The service always dispatches through here; overriding it
    /// replaces the routing for every kind.
    async fn probe(&self, kind: ProbeKind, ctx: &ProbeContext) -> ProbeResult {
        match kind {
            ProbeKind::Startup => self.probe_startup(ctx).await,
            ProbeKind::Readiness => self.probe_readiness(ctx).await,
            ProbeKind::Liveness => self.probe_liveness(ctx).await,
        }
    }
}
