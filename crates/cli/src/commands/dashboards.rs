//! Dashboards command implementation.
//!
//! The folder is ensured first so dashboards land in it.

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
            let folder_ready = client.provision_folder(plan, &mut report).await;
            client
                .provision_dashboards(plan, folder_ready, &mut report)
                .await;
        })
        .await?;

    crate::commands::print_report(&report, format)
}
