//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, plan files, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Plan file parsing (delegated to plan.rs).
//!
//! Invariants / Assumptions:
//! - Whatever is set last wins; callers apply env first, then CLI overrides.
//! - Datasource URL overrides are applied after the plan file is read.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::plan::{load_plan_file, validate_plan};
use crate::constants::{
    DEFAULT_GRAFANA_URL, DEFAULT_MAX_RETRIES, DEFAULT_PASSWORD, DEFAULT_READY_ATTEMPTS,
    DEFAULT_READY_DELAY_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME, MAX_MAX_RETRIES,
    MAX_READY_ATTEMPTS, MAX_TIMEOUT_SECS,
};
use crate::types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, ProvisionPlan, ReadinessConfig,
};

/// Configuration loader that builds config from environment variables and plan files.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    ready_attempts: Option<u32>,
    ready_delay: Option<Duration>,
    plan_path: Option<PathBuf>,
    datasource_urls: Vec<(String, String)>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set how many health checks to make before giving up.
    pub fn with_ready_attempts(mut self, attempts: u32) -> Self {
        self.ready_attempts = Some(attempts);
        self
    }

    /// Set the pause between health checks.
    pub fn with_ready_delay(mut self, delay: Duration) -> Self {
        self.ready_delay = Some(delay);
        self
    }

    /// Read the provisioning plan from this file instead of the built-in plan.
    pub fn with_plan_path(mut self, path: PathBuf) -> Self {
        self.plan_path = Some(path);
        self
    }

    /// Override the URL of the datasource with the given logical key.
    pub fn with_datasource_url(mut self, key: &str, url: String) -> Self {
        self.set_datasource_url(key, url);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_GRAFANA_URL),
        )?;

        // API token takes precedence over basic auth
        let strategy = match (self.api_token, self.username, self.password) {
            (Some(token), _, _) => AuthStrategy::ApiToken { token },
            (None, Some(username), Some(password)) => AuthStrategy::Basic { username, password },
            (None, None, None) => AuthStrategy::Basic {
                username: DEFAULT_USERNAME.to_string(),
                password: SecretString::new(DEFAULT_PASSWORD.to_string().into()),
            },
            _ => return Err(ConfigError::MissingAuth),
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };
        Self::validate_connection(&connection)?;

        let readiness = ReadinessConfig {
            attempts: self.ready_attempts.unwrap_or(DEFAULT_READY_ATTEMPTS),
            delay: self
                .ready_delay
                .unwrap_or(Duration::from_secs(DEFAULT_READY_DELAY_SECS)),
        };
        Self::validate_readiness(&readiness)?;

        let mut plan = match self.plan_path {
            Some(ref path) => load_plan_file(path)?,
            None => ProvisionPlan::default(),
        };
        for (key, url) in self.datasource_urls {
            match plan.datasource_mut(&key) {
                Some(ds) => ds.url = url,
                None => tracing::debug!(key = %key, "No datasource with this key in plan"),
            }
        }
        validate_plan(&plan)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            readiness,
            plan,
        })
    }

    fn validate_connection(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }

        Ok(())
    }

    fn validate_readiness(readiness: &ReadinessConfig) -> Result<(), ConfigError> {
        if readiness.attempts == 0 || readiness.attempts > MAX_READY_ATTEMPTS {
            return Err(ConfigError::InvalidReadiness {
                message: format!(
                    "attempts must be between 1 and {} (got {})",
                    MAX_READY_ATTEMPTS, readiness.attempts
                ),
            });
        }
        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn plan_path(&self) -> Option<&PathBuf> {
        self.plan_path.as_ref()
    }

    pub(crate) fn set_plan_path(&mut self, path: Option<PathBuf>) {
        self.plan_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_ready_attempts(&mut self, attempts: Option<u32>) {
        self.ready_attempts = attempts;
    }

    pub(crate) fn set_ready_delay(&mut self, delay: Option<Duration>) {
        self.ready_delay = delay;
    }

    pub(crate) fn set_datasource_url(&mut self, key: &str, url: String) {
        self.datasource_urls.retain(|(k, _)| k != key);
        self.datasource_urls.push((key.to_string(), url));
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing
/// - Require an absolute http(s) URL with a host
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:9000): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:9000), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:9000)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
