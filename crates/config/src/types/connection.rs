//! Connection configuration types for Grafana.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define readiness polling settings.
//! - Define the main `Config` structure combining connection, auth and plan.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `Config::default()` targets a local development Grafana (localhost:9000, admin/admin).

use crate::constants::{
    DEFAULT_GRAFANA_URL, DEFAULT_MAX_RETRIES, DEFAULT_PASSWORD, DEFAULT_READY_ATTEMPTS,
    DEFAULT_READY_DELAY_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use crate::types::plan::ProvisionPlan;
use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for a Grafana server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., http://localhost:9000)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GRAFANA_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// How long to wait for Grafana to report healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessConfig {
    /// Number of health checks before giving up.
    pub attempts: u32,
    /// Pause between two health checks.
    pub delay: Duration,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_READY_ATTEMPTS,
            delay: Duration::from_secs(DEFAULT_READY_DELAY_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Readiness polling settings
    pub readiness: ReadinessConfig,
    /// What to provision
    pub plan: ProvisionPlan,
}

impl Default for Config {
    /// Development configuration: local Grafana with the stock admin/admin login.
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                strategy: AuthStrategy::Basic {
                    username: DEFAULT_USERNAME.to_string(),
                    password: SecretString::new(DEFAULT_PASSWORD.to_string().into()),
                },
            },
            readiness: ReadinessConfig::default(),
            plan: ProvisionPlan::default(),
        }
    }
}

impl Config {
    /// Checks if this configuration is using Grafana's stock admin credentials.
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        matches!(
            &self.auth.strategy,
            AuthStrategy::Basic { username, password }
                if username == DEFAULT_USERNAME
                    && password.expose_secret() == DEFAULT_PASSWORD
        )
    }

    /// Create a config for the given base URL authenticating with an API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
            ..Self::default()
        }
    }
}
