//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render health and provisioning reports as human readable text or JSON.
//!
//! Does NOT handle:
//! - Printing (formatters return strings; commands write them to stdout).
//!
//! Invariants:
//! - JSON output is a single pretty-printed document.
//! - Text output ends with a newline.

mod json;
mod text;

use anyhow::Result;
use clap::ValueEnum;
use grafana_client::{HealthStatus, ProvisionReport};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable status lines
    Text,
    /// Machine readable JSON
    Json,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format the result of a readiness poll.
    fn format_health(&self, health: &HealthStatus) -> Result<String>;

    /// Format a (possibly partial) provisioning report.
    fn format_report(&self, report: &ProvisionReport) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
