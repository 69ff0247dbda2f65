//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod plan_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `apply_env` reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<String>)> {
    [
        "GRAFANA_URL",
        "GRAFANA_USER",
        "GRAFANA_PASSWORD",
        "GRAFANA_API_TOKEN",
        "GRAFANA_SKIP_VERIFY",
        "GRAFANA_TIMEOUT",
        "GRAFANA_MAX_RETRIES",
        "GRAFANA_READY_ATTEMPTS",
        "GRAFANA_READY_DELAY",
        "GRAFANA_PLAN_PATH",
        "PROMETHEUS_URL",
        "LOKI_URL",
    ]
    .into_iter()
    .map(|k| (k, None))
    .collect()
}

/// Cleared env plus the given overrides.
pub fn env_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
    let mut vars = cleared_env();
    for (key, value) in overrides {
        vars.retain(|(k, _)| k != key);
        vars.push((*key, Some(value.to_string())));
    }
    vars
}
