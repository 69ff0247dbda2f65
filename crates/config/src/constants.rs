//! Centralized constants for the grafana-provision workspace.
//!
//! Default values used across crates live here to avoid magic numbers
//! scattered through the client and CLI.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Grafana base URL.
pub const DEFAULT_GRAFANA_URL: &str = "http://localhost:9000";

/// Default Grafana admin user.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default Grafana admin password.
pub const DEFAULT_PASSWORD: &str = "admin";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for the configurable retry count.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Readiness Defaults
// =============================================================================

/// Number of health checks before giving up on Grafana.
pub const DEFAULT_READY_ATTEMPTS: u32 = 30;

/// Delay between health checks in seconds.
pub const DEFAULT_READY_DELAY_SECS: u64 = 5;

/// Upper bound for the configurable number of health checks.
pub const MAX_READY_ATTEMPTS: u32 = 1000;

// =============================================================================
// Provisioning Plan Defaults
// =============================================================================

/// Pause after datasource registration, giving Grafana time to settle.
pub const DEFAULT_SETTLE_DELAY_SECS: u64 = 2;

/// Default Prometheus URL registered as a datasource.
pub const DEFAULT_PROMETHEUS_URL: &str = "http://localhost:9090";

/// Default Loki URL registered as a datasource.
pub const DEFAULT_LOKI_URL: &str = "http://localhost:3100";

/// Default folder UID for provisioned dashboards and alert rules.
pub const DEFAULT_FOLDER_UID: &str = "lucecis";

/// Default folder title.
pub const DEFAULT_FOLDER_TITLE: &str = "Lucecis";

/// Default alert rules file.
pub const DEFAULT_ALERT_RULES_PATH: &str = "alerts/alert-rules.json";
