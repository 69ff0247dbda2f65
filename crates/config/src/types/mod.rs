//! Configuration type definitions for grafana-provision.
//!
//! Responsibilities:
//! - Define configuration types for authentication, connections, readiness and the provisioning plan.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
pub(crate) mod connection;
mod plan;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig, ReadinessConfig};
pub use plan::{AlertRulesSpec, DashboardSpec, DatasourceSpec, FolderSpec, ProvisionPlan};
