//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build the configuration (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "grafana-provision")]
#[command(about = "Provision Grafana datasources, dashboards and alert rules", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-provision setup\n  grafana-provision --url http://grafana:3000 --api-token $GRAFANA_API_TOKEN setup\n  grafana-provision wait --ready-attempts 60\n  grafana-provision --output json datasources\n  grafana-provision --plan provision.json dashboards\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:9000)
    #[arg(long, global = true, env = "GRAFANA_URL")]
    pub url: Option<String>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_USER")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "GRAFANA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Service account token (preferred over username/password)
    #[arg(short, long, global = true, env = "GRAFANA_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "GRAFANA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests
    #[arg(long, global = true, env = "GRAFANA_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "GRAFANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Number of health checks before giving up on Grafana
    #[arg(long, global = true, env = "GRAFANA_READY_ATTEMPTS")]
    pub ready_attempts: Option<u32>,

    /// Seconds between two health checks
    #[arg(long, global = true, env = "GRAFANA_READY_DELAY")]
    pub ready_delay: Option<u64>,

    /// Path to a JSON provisioning plan (defaults to the built-in plan)
    #[arg(long, global = true, env = "GRAFANA_PLAN_PATH", value_name = "FILE")]
    pub plan: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// OTLP endpoint for exporting traces (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "GRAFANA_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wait for Grafana, then run every provisioning step
    Setup {
        /// Assume Grafana is already up and skip the readiness poll
        #[arg(long)]
        skip_wait: bool,
    },

    /// Wait until Grafana reports healthy
    Wait,

    /// Register datasources and print their UIDs
    Datasources,

    /// Create the dashboard folder
    Folder,

    /// Import dashboards into the folder
    Dashboards,

    /// Register datasources, then import alert rules with their UIDs
    Alerts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "grafana-provision",
            "setup",
            "--url",
            "http://grafana:3000",
            "--ready-attempts",
            "5",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("http://grafana:3000"));
        assert_eq!(cli.ready_attempts, Some(5));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Setup { skip_wait: false }));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["grafana-provision"]).is_err());
    }
}
