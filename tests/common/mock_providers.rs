use async_trait::async_trait;
use health_aggregator::health::ProbeResult;
use health_aggregator::{CheckDetail, Checks, HealthProvider, ProbeContext, ProbeError, ProbeKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Returns fixed checks per probe kind and counts how often it was probed
#[derive(Debug, Default)]
pub struct MockProvider {
    name: String,
    checks: HashMap<ProbeKind, Checks>,
    invocations: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Provider answering readiness with one passing check named `ok`
    pub fn passing(name: &str) -> Self {
        Self::new(name).with_check(ProbeKind::Readiness, "ok", CheckDetail::pass("Always ok"))
    }

    pub fn with_check(mut self, kind: ProbeKind, check: &str, detail: CheckDetail) -> Self {
        self.checks
            .entry(kind)
            .or_default()
            .insert(check.to_string(), detail);
        self
    }

    pub fn invocations(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.invocations)
    }
}

#[async_trait]
impl HealthProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self, kind: ProbeKind, _ctx: &ProbeContext) -> ProbeResult {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(self.checks.get(&kind).cloned().unwrap_or_default())
    }
}

/// Probe that cannot execute
pub struct FailingProvider {
    name: String,
}

impl FailingProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl HealthProvider for FailingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self, _kind: ProbeKind, _ctx: &ProbeContext) -> ProbeResult {
        Err(anyhow::anyhow!("{} backend unreachable", self.name).into())
    }
}

/// Sleeps for `delay` without looking at its context, then passes
pub struct SlowProvider {
    name: String,
    delay: Duration,
}

impl SlowProvider {
    pub fn new(name: &str, delay: Duration) -> Self {
        Self {
            name: name.to_string(),
            delay,
        }
    }
}

#[async_trait]
impl HealthProvider for SlowProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self, _kind: ProbeKind, _ctx: &ProbeContext) -> ProbeResult {
        tokio::time::sleep(self.delay).await;
        let mut checks = Checks::new();
        checks.insert("ok".to_string(), CheckDetail::pass("Eventually ok"));
        Ok(checks)
    }
}

/// Waits on its context and reports the cancellation as a probe error
pub struct ContextAwareProvider {
    name: String,
}

impl ContextAwareProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl HealthProvider for ContextAwareProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self, _kind: ProbeKind, ctx: &ProbeContext) -> ProbeResult {
        ctx.cancelled().await;
        Err(ProbeError::Cancelled)
    }
}

/// Cancels the caller's token while probing, then passes
pub struct CancellingProvider {
    name: String,
    token: CancellationToken,
}

impl CancellingProvider {
    pub fn new(name: &str, token: CancellationToken) -> Self {
        Self {
            name: name.to_string(),
            token,
        }
    }
}

#[async_trait]
impl HealthProvider for CancellingProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe(&self, _kind: ProbeKind, _ctx: &ProbeContext) -> ProbeResult {
        self.token.cancel();
        let mut checks = Checks::new();
        checks.insert("ok".to_string(), CheckDetail::pass("Ok before cancel"));
        Ok(checks)
    }
}

/// Implements only the per-kind methods and relies on the default kind routing
pub struct KindRoutedProvider {
    name: String,
}

impl KindRoutedProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl HealthProvider for KindRoutedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn probe_readiness(&self, _ctx: &ProbeContext) -> ProbeResult {
        let mut checks = Checks::new();
        checks.insert("pool".to_string(), CheckDetail::pass("Connection pool ready"));
        Ok(checks)
    }

    async fn probe_liveness(&self, _ctx: &ProbeContext) -> ProbeResult {
        let mut checks = Checks::new();
        checks.insert(
            "heartbeat".to_string(),
            CheckDetail::warn("Heartbeat lagging").with_observed(3, "s"),
        );
        Ok(checks)
    }
}
