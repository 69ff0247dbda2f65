//! Setup command implementation: readiness poll plus the full workflow.

use anyhow::{Context, Result};
use grafana_config::Config;
use tracing::{info, warn};

use crate::cancellation::CancellationToken;
use crate::formatters::OutputFormat;

pub async fn run(
    config: Config,
    skip_wait: bool,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = crate::commands::build_client_from_config(&config)?;

    if skip_wait {
        info!("Skipping readiness check");
    } else {
        cancel
            .run(client.wait_for_ready(&config.readiness))
            .await?
            .context("Grafana is not ready")?;
    }

    let report = cancel.run(client.provision(&config.plan)).await?;

    if !report.is_clean() {
        warn!(
            failures = report.failures.len(),
            "Some provisioning steps failed; see the report for details"
        );
    }

    crate::commands::print_report(&report, format)
}
