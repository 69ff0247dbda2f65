//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read and parse an environment variable.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("GRAFANA_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("GRAFANA_USER") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("GRAFANA_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("GRAFANA_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("GRAFANA_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("GRAFANA_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) =
        parse_env::<usize>("GRAFANA_MAX_RETRIES", "must be a non-negative integer")?
    {
        loader.set_max_retries(Some(retries));
    }
    if let Some(attempts) =
        parse_env::<u32>("GRAFANA_READY_ATTEMPTS", "must be a positive integer")?
    {
        loader.set_ready_attempts(Some(attempts));
    }
    if let Some(secs) = parse_env::<u64>("GRAFANA_READY_DELAY", "must be a number of seconds")? {
        loader.set_ready_delay(Some(Duration::from_secs(secs)));
    }

    // Plan path only if not already set via CLI
    if loader.plan_path().is_none()
        && let Some(path) = env_var_or_none("GRAFANA_PLAN_PATH")
    {
        loader.set_plan_path(Some(PathBuf::from(path)));
    }

    if let Some(url) = env_var_or_none("PROMETHEUS_URL") {
        loader.set_datasource_url("prometheus", url);
    }
    if let Some(url) = env_var_or_none("LOKI_URL") {
        loader.set_datasource_url("loki", url);
    }

    Ok(())
}
