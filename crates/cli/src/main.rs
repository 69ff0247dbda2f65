//! grafana-provision - provision a Grafana instance from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the configuration and the Grafana client.
//! - Run the requested provisioning step and print the result.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Grafana API calls or the provisioning workflow (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; command results go to stdout.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_client::TracingConfig;
use grafana_config::{Config, ConfigLoader};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let mut tracing_config = TracingConfig::new();
    if let Some(ref endpoint) = cli.otlp_endpoint {
        tracing_config = tracing_config.with_otlp_endpoint(endpoint);
    }
    let tracing_guard = match tracing_config.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize tracing: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Grafana credentials (admin/admin). \
             These are for local development only - change before production use."
        );
    }

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    tracing_guard.shutdown();

    std::process::exit(exit_code.as_i32());
}

/// Layer configuration: CLI flags over environment over plan file over defaults.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so the environment can still provide the path
    if let Some(ref path) = cli.plan
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_plan_path(path.clone());
    }

    loader = loader.from_env()?;

    // clap reads GRAFANA_* itself, so blank values must be dropped here too
    if let Some(url) = non_blank(&cli.url) {
        loader = loader.with_base_url(url.to_string());
    }
    if let Some(username) = non_blank(&cli.username) {
        loader = loader.with_username(username.to_string());
    }
    if let Some(password) = non_blank(&cli.password) {
        loader = loader.with_password(password.to_string());
    }
    if let Some(token) = non_blank(&cli.api_token) {
        loader = loader.with_api_token(token.to_string());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(attempts) = cli.ready_attempts {
        loader = loader.with_ready_attempts(attempts);
    }
    if let Some(delay_secs) = cli.ready_delay {
        loader = loader.with_ready_delay(std::time::Duration::from_secs(delay_secs));
    }

    Ok(loader.build()?)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
