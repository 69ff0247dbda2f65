//! Alerts command implementation.
//!
//! Alert rules reference datasources by placeholder, so the datasources are
//! registered (idempotently) first to learn their UIDs. The folder is
//! ensured too since Grafana rejects rules for unknown folders.

use anyhow::Result;
use grafana_client::ProvisionReport;
use grafana_config::Config;

use crate::cancellation::CancellationToken;
use crate::formatters::OutputFormat;

pub async fn run(config: Config, format: OutputFormat, cancel: &CancellationToken) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;
    let plan = &config.plan;

    let mut report = ProvisionReport::default();
    cancel
        .run(async {
            let uids = client.provision_datasources(plan, &mut report).await;
            client.provision_folder(plan, &mut report).await;
            client.provision_alert_rules(plan, &uids, &mut report).await;
        })
        .await?;

    crate::commands::print_report(&report, format)
}
