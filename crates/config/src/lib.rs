//! Configuration management for grafana-provision.
//!
//! This crate provides the types and loaders describing which Grafana to
//! talk to, how to authenticate, and what to provision there. Values come
//! from built-in defaults, a JSON plan file, environment variables and
//! explicit overrides, in increasing order of precedence.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, load_plan_file};
pub use types::{
    AlertRulesSpec, AuthConfig, AuthStrategy, Config, ConnectionConfig, DashboardSpec,
    DatasourceSpec, FolderSpec, ProvisionPlan, ReadinessConfig,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
