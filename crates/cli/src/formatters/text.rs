//! Text formatter implementation.
//!
//! One status line per resource, grouped by step. Sections for steps that
//! did not run are omitted.

use anyhow::Result;
use grafana_client::{
    AlertRulesReport, HealthStatus, ImportOutcome, ProvisionReport, UpsertOutcome,
};
use std::fmt::Write;

use crate::formatters::Formatter;

const OK: &str = "✅";
const SKIP: &str = "⚠️ ";
const FAIL: &str = "❌";

/// Text formatter.
pub struct TextFormatter;

fn upsert_label(outcome: UpsertOutcome) -> &'static str {
    match outcome {
        UpsertOutcome::Created => "created",
        UpsertOutcome::AlreadyExists => "already exists",
    }
}

fn write_alert_rules(out: &mut String, report: &AlertRulesReport) -> std::fmt::Result {
    writeln!(out, "Alert rules ({})", report.path.display())?;
    match &report.outcome {
        ImportOutcome::Imported(import) => {
            for rule in &import.imported {
                writeln!(out, "  {OK} {} (uid {})", rule.title, rule.uid)?;
            }
            for failure in &import.failed {
                writeln!(out, "  {FAIL} {}: {}", failure.step, failure.error)?;
            }
            writeln!(
                out,
                "  {} datasource reference(s) rewritten",
                import.substitutions
            )?;
        }
        ImportOutcome::Skipped { path } => {
            writeln!(out, "  {SKIP} skipped: {} not found", path.display())?;
        }
    }
    Ok(())
}

impl Formatter for TextFormatter {
    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(format!(
            "{OK} Grafana is ready (version {}, database {})\n",
            health.version.as_deref().unwrap_or("unknown"),
            health.database.as_deref().unwrap_or("unknown"),
        ))
    }

    fn format_report(&self, report: &ProvisionReport) -> Result<String> {
        let mut out = String::new();

        if !report.datasources.is_empty() {
            writeln!(out, "Datasources")?;
            for ds in &report.datasources {
                writeln!(
                    out,
                    "  {OK} {} ({}) {}, uid {}",
                    ds.name,
                    ds.key,
                    upsert_label(ds.outcome),
                    ds.uid
                )?;
            }
        }

        if let Some(folder) = &report.folder {
            writeln!(out, "Folder")?;
            writeln!(
                out,
                "  {OK} {} ({}) {}",
                folder.title,
                folder.uid,
                upsert_label(folder.outcome)
            )?;
        }

        if !report.dashboards.is_empty() {
            writeln!(out, "Dashboards")?;
            for dashboard in &report.dashboards {
                match &dashboard.outcome {
                    ImportOutcome::Imported(result) => writeln!(
                        out,
                        "  {OK} {} imported (uid {})",
                        dashboard.title, result.uid
                    )?,
                    ImportOutcome::Skipped { path } => writeln!(
                        out,
                        "  {SKIP} {} skipped: {} not found",
                        dashboard.title,
                        path.display()
                    )?,
                }
            }
        }

        if let Some(alert_rules) = &report.alert_rules {
            write_alert_rules(&mut out, alert_rules)?;
        }

        if !report.failures.is_empty() {
            writeln!(out, "Failures")?;
            for failure in &report.failures {
                writeln!(out, "  {FAIL} {}: {}", failure.step, failure.error)?;
            }
        }

        if report.is_clean() {
            writeln!(out, "Provisioning complete")?;
        } else {
            writeln!(out, "Provisioning finished with errors")?;
        }

        Ok(out)
    }
}
