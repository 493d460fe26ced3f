//! # System Health Provider
//!
//! Built-in provider reporting runtime resource usage for liveness: resident memory of the
//! current process and the number of live tokio tasks. Startup and readiness have nothing to
//! report.

use anyhow::anyhow;
use async_trait::async_trait;
use sysinfo::{Pid, System};

use super::context::ProbeContext;
use super::provider::{HealthProvider, ProbeResult};
use super::types::{CheckDetail, Checks};
use crate::config::SystemProbeConfig;

const ONE_MIB: u64 = 1 << 20;

pub struct SystemHealthProvider {
    config: SystemProbeConfig,
}

impl SystemHealthProvider {
    pub const NAME: &'static str = "system";

    pub fn new(config: SystemProbeConfig) -> Self {
        Self { config }
    }

    async fn memory_check(&self) -> ProbeResult {
        let pid =
            sysinfo::get_current_pid().map_err(|e| anyhow!("current pid unavailable: {e}"))?;
        // Process stats come from blocking /proc reads
        let memory_bytes = tokio::task::spawn_blocking(move || resident_memory_bytes(pid))
            .await
            .map_err(|e| anyhow!("memory sampling task failed: {e}"))??;
        let memory_mib = memory_bytes / ONE_MIB;

        let check = if memory_mib > self.config.memory_warn_mib {
            CheckDetail::warn("Memory usage")
        } else {
            CheckDetail::pass("Memory usage")
        };

        let mut checks = Checks::new();
        checks.insert("memory".to_string(), check.with_observed(memory_mib, "MiB"));
        Ok(checks)
    }

    fn task_check(&self) -> Option<CheckDetail> {
        let handle = tokio::runtime::Handle::try_current().ok()?;
        let tasks = handle.metrics().num_alive_tasks();

        let check = if tasks > self.config.task_warn_threshold {
            CheckDetail::warn("Number of async tasks")
        } else {
            CheckDetail::pass("Number of async tasks")
        };
        Some(check.with_observed(tasks, "tasks"))
    }
}

impl Default for SystemHealthProvider {
    fn default() -> Self {
        Self::new(SystemProbeConfig::default())
    }
}

fn resident_memory_bytes(pid: Pid) -> anyhow::Result<u64> {
    let mut system = System::new();
    if !system.refresh_process(pid) {
        return Err(anyhow!("process {pid} not found"));
    }
    system
        .process(pid)
        .map(|process| process.memory())
        .ok_or_else(|| anyhow!("process {pid} not found"))
}

#[async_trait]
impl HealthProvider for SystemHealthProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn probe_liveness(&self, _ctx: &ProbeContext) -> ProbeResult {
        let mut checks = self.memory_check().await?;
        if let Some(tasks) = self.task_check() {
            checks.insert("tasks".to_string(), tasks);
        }
        Ok(checks)
    }
}
