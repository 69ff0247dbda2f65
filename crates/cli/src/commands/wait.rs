//! Wait command implementation.

use anyhow::{Context, Result};
use grafana_config::Config;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(config: Config, format: OutputFormat, cancel: &CancellationToken) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    let health = cancel
        .run(client.wait_for_ready(&config.readiness))
        .await?
        .context("Grafana is not ready")?;

    print!("{}", get_formatter(format).format_health(&health)?);
    Ok(())
}
