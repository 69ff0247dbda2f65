//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use grafana_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format = cli.output;

    match cli.command {
        Commands::Setup { skip_wait } => {
            commands::setup::run(config, skip_wait, format, cancel_token).await?;
        }
        Commands::Wait => {
            commands::wait::run(config, format, cancel_token).await?;
        }
        Commands::Datasources => {
            commands::datasources::run(config, format, cancel_token).await?;
        }
        Commands::Folder => {
            commands::folder::run(config, format, cancel_token).await?;
        }
        Commands::Dashboards => {
            commands::dashboards::run(config, format, cancel_token).await?;
        }
        Commands::Alerts => {
            commands::alerts::run(config, format, cancel_token).await?;
        }
    }

    Ok(())
}
