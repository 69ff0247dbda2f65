//! CLI command implementations.
//!
//! Every command except `wait` produces a [`ProvisionReport`]; steps that
//! did not run simply stay empty in it.

pub mod alerts;
pub mod dashboards;
pub mod datasources;
pub mod folder;
pub mod setup;
pub mod wait;

use anyhow::{Context, Result};
use grafana_client::{GrafanaClient, ProvisionReport};
use grafana_config::Config;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

/// Build a Grafana client from the loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<GrafanaClient> {
    let client = GrafanaClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Grafana client")?;
    info!("Connecting to {}", client.base_url());
    Ok(client)
}

/// Print a report to stdout in the requested format.
pub fn print_report(report: &ProvisionReport, format: OutputFormat) -> Result<()> {
    let output = get_formatter(format).format_report(report)?;
    print!("{}", output);
    Ok(())
}
