//! # Health Check Data Model
//!
//! The shapes a probe returns and how they fold into an overall status.

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Outcome of a single check, ordered by severity: `Pass < Warn < Fail`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }

    /// Severity level (0 = pass, 2 = fail)
    pub fn severity(&self) -> u8 {
        match self {
            Status::Pass => 0,
            Status::Warn => 1,
            Status::Fail => 2,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic observation reported by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckDetail {
    /// Human-readable description of what was observed
    pub description: String,
    /// Observed value; numeric in most cases but any JSON value is accepted
    pub observed_value: serde_json::Value,
    /// Unit of `observed_value` (empty when unitless)
    pub observed_unit: String,
    pub status: Status,
}

impl CheckDetail {
    pub fn new(description: impl Into<String>, status: Status) -> Self {
        Self {
            description: description.into(),
            observed_value: serde_json::Value::Null,
            observed_unit: String::new(),
            status,
        }
    }

    pub fn pass(description: impl Into<String>) -> Self {
        Self::new(description, Status::Pass)
    }

    pub fn warn(description: impl Into<String>) -> Self {
        Self::new(description, Status::Warn)
    }

    pub fn fail(description: impl Into<String>) -> Self {
        Self::new(description, Status::Fail)
    }

    pub fn with_observed(
        mut self,
        value: impl Into<serde_json::Value>,
        unit: impl Into<String>,
    ) -> Self {
        self.observed_value = value.into();
        self.observed_unit = unit.into();
        self
    }

    /// Placeholder recorded when a provider's probe could not execute.
    pub(crate) fn failed_probe() -> Self {
        Self::fail("Failed check").with_observed(0, "")
    }
}

/// Check name to detail. An empty map means "nothing to report", not an error.
pub type Checks = HashMap<String, CheckDetail>;

/// Worst status across `details`; `Pass` when there are none.
pub fn overall_status<'a, I>(details: I) -> Status
where
    I: IntoIterator<Item = &'a CheckDetail>,
{
    details
        .into_iter()
        .map(|detail| detail.status)
        .max()
        .unwrap_or(Status::Pass)
}

/// Per-status counts for a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub total: usize,
    pub pass: usize,
    pub warn: usize,
    pub fail: usize,
}

/// Aggregated output of one check invocation.
///
/// Keys are `provider:check`, or the bare provider name when that provider's probe errored.
/// The overall status is always derived from the contained details and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub checks: Checks,
    pub checked_at: DateTime<Utc>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self {
            checks: Checks::new(),
            checked_at: Utc::now(),
        }
    }

    pub fn status(&self) -> Status {
        overall_status(self.checks.values())
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn get(&self, key: &str) -> Option<&CheckDetail> {
        self.checks.get(key)
    }

    pub fn summary(&self) -> StatusSummary {
        self.checks
            .values()
            .fold(StatusSummary::default(), |mut summary, detail| {
                summary.total += 1;
                match detail.status {
                    Status::Pass => summary.pass += 1,
                    Status::Warn => summary.warn += 1,
                    Status::Fail => summary.fail += 1,
                }
                summary
            })
    }

    /// Merge one provider's checks under its namespace. Last write wins on key collision.
    pub(crate) fn merge_provider_checks(&mut self, provider: &str, checks: Checks) {
        for (name, detail) in checks {
            self.checks.insert(format!("{provider}:{name}"), detail);
        }
    }

    pub(crate) fn record_provider_failure(&mut self, provider: &str) {
        self.checks.insert(provider.to_string(), CheckDetail::failed_probe());
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for CheckResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckResult", 3)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("checkedAt", &self.checked_at)?;
        state.serialize_field("checks", &self.checks)?;
        state.end()
    }
}
