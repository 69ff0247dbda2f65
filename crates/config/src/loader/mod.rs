//! Configuration loader for environment variables and plan files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and JSON plan files.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Talking to Grafana (see client crate).
//!
//! Invariants / Assumptions:
//! - Builder methods (CLI flags) take precedence over environment variables.
//! - Environment variables take precedence over plan file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod plan;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use plan::load_plan_file;

#[cfg(test)]
mod tests;
