//! Folder command implementation.

use anyhow::Result;
use grafana_client::ProvisionReport;
use grafana_config::Config;

use crate::cancellation::CancellationToken;
use crate::formatters::OutputFormat;

pub async fn run(config: Config, format: OutputFormat, cancel: &CancellationToken) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    let mut report = ProvisionReport::default();
    cancel
        .run(client.provision_folder(&config.plan, &mut report))
        .await?;

    crate::commands::print_report(&report, format)
}
