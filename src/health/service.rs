//! # Health Aggregation Service
//!
//! Owns the provider registry and folds every provider's probe output into one
//! [`CheckResult`].
//!
//! ## Dispatch
//!
//! Providers are probed sequentially in registration order. Each probe runs under a child
//! [`ProbeContext`] whose deadline is the earlier of the caller's deadline and the
//! per-provider timeout; a probe still running at that deadline is dropped and recorded as a
//! failure. The caller's context is checked before each dispatch, and once it is cancelled
//! the partial result gathered so far is returned.
//!
//! Probe errors never reach the caller. They are logged and converted into a single `fail`
//! entry keyed by the provider's bare name, so one broken provider cannot take down the
//! overall health check.
//!
//! ## Usage
//!
//! ```rust
//! use health_aggregator::health::{HealthService, ProbeContext, Status};
//!
//! # async fn example() {
//! let service = HealthService::new(Vec::new());
//! let result = service.check_readiness(&ProbeContext::new()).await;
//! assert_eq!(result.status(), Status::Pass);
//! # }
//! ```

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use super::context::ProbeContext;
use super::provider::{HealthProvider, ProbeKind, ProbeResult};
use super::system::SystemHealthProvider;
use super::types::CheckResult;
use crate::config::{HealthConfig, DEFAULT_PROVIDER_TIMEOUT_MS};
use crate::error::ProbeError;
use crate::logging::log_probe_failure;

pub struct HealthService {
    /// Registered providers in registration order
    providers: RwLock<Vec<Arc<dyn HealthProvider>>>,
    provider_timeout: Duration,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("providers", &self.provider_names())
            .field("provider_timeout", &self.provider_timeout)
            .finish()
    }
}

impl HealthService {
    pub fn new(providers: Vec<Arc<dyn HealthProvider>>) -> Self {
        Self {
            providers: RwLock::new(providers),
            provider_timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
        }
    }

    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn from_config(config: &HealthConfig, providers: Vec<Arc<dyn HealthProvider>>) -> Self {
        Self::new(providers).with_provider_timeout(config.provider_timeout())
    }

    /// Build from configuration and register the built-in `system` provider when enabled.
    pub fn bootstrap(config: &HealthConfig, providers: Vec<Arc<dyn HealthProvider>>) -> Self {
        let service = Self::from_config(config, providers);
        if config.system.enabled {
            service.register(Arc::new(SystemHealthProvider::new(config.system.clone())));
        }

        info!(
            providers = service.provider_count(),
            provider_timeout_ms = service.provider_timeout.as_millis() as u64,
            "Health service bootstrapped"
        );
        service
    }

    /// Append a provider. Names are not checked for uniqueness.
    pub fn register(&self, provider: Arc<dyn HealthProvider>) {
        debug!(provider = provider.name(), "Registering health provider");
        self.providers.write().push(provider);
    }

    pub fn provider_count(&self) -> usize {
        self.providers.read().len()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .read()
            .iter()
            .map(|provider| provider.name().to_string())
            .collect()
    }

    pub fn provider_timeout(&self) -> Duration {
        self.provider_timeout
    }

    pub async fn check_startup(&self, ctx: &ProbeContext) -> CheckResult {
        self.check(ProbeKind::Startup, ctx).await
    }

    pub async fn check_readiness(&self, ctx: &ProbeContext) -> CheckResult {
        self.check(ProbeKind::Readiness, ctx).await
    }

    pub async fn check_liveness(&self, ctx: &ProbeContext) -> CheckResult {
        self.check(ProbeKind::Liveness, ctx).await
    }

    /// Probe every registered provider for `kind` and merge the results.
    pub async fn check(&self, kind: ProbeKind, ctx: &ProbeContext) -> CheckResult {
        // Snapshot under the read lock so registration never exposes a partial list
        let providers: Vec<Arc<dyn HealthProvider>> = self.providers.read().clone();
        let mut result = CheckResult::new();

        for provider in &providers {
            if ctx.is_cancelled() {
                debug!(
                    probe = %kind,
                    collected = result.len(),
                    "Check cancelled, returning partial result"
                );
                return result;
            }

            match self.probe_provider(provider.as_ref(), kind, ctx).await {
                Ok(checks) if checks.is_empty() => {}
                Ok(checks) => result.merge_provider_checks(provider.name(), checks),
                Err(error) => {
                    log_probe_failure(provider.name(), kind, &error);
                    result.record_provider_failure(provider.name());
                }
            }
        }

        result
    }

    async fn probe_provider(
        &self,
        provider: &dyn HealthProvider,
        kind: ProbeKind,
        ctx: &ProbeContext,
    ) -> ProbeResult {
        let probe_ctx = ctx.child(self.provider_timeout);
        // Cancels the child token on every exit path
        let _release = probe_ctx.token().clone().drop_guard();

        let started = Instant::now();
        let probe = provider.probe(kind, &probe_ctx);
        let Some(deadline) = probe_ctx.deadline() else {
            return probe.await;
        };

        match tokio::time::timeout_at(deadline, probe).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ProbeError::Timeout {
                timeout_ms: deadline.saturating_duration_since(started).as_millis() as u64,
            }),
        }
    }
}
