//! # Structured Logging Module
//!
//! Environment-aware structured logging for the health aggregation engine. Console output
//! is human-readable by default and switches to JSON when `HEALTH_LOG_FORMAT=json`.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ProbeError;
use crate::health::ProbeKind;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(get_log_level(&environment)));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if use_json_format() {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };

        // A global subscriber may already be installed by the host application
        if result.is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - keeping existing subscriber"
            );
        }

        tracing::info!(
            environment = %environment,
            json = use_json_format(),
            "Structured logging initialized"
        );
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("HEALTH_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> String {
    match environment {
        "test" | "development" => "debug".to_string(),
        "production" => "info".to_string(),
        _ => "debug".to_string(),
    }
}

fn use_json_format() -> bool {
    std::env::var("HEALTH_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Log a provider whose probe could not execute
pub fn log_probe_failure(provider: &str, kind: ProbeKind, error: &ProbeError) {
    tracing::error!(
        provider = %provider,
        probe = %kind,
        error = %error,
        timed_out = error.is_timeout(),
        "failed check"
    );
}
