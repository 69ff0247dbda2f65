//! JSON formatter implementation.

use anyhow::Result;
use grafana_client::{HealthStatus, ProvisionReport};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(health)?))
    }

    fn format_report(&self, report: &ProvisionReport) -> Result<String> {
        let mut value = serde_json::to_value(report)?;
        if let Some(map) = value.as_object_mut() {
            map.insert("clean".to_string(), report.is_clean().into());
        }
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }
}
