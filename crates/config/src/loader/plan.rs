//! Plan file loading.
//!
//! Responsibilities:
//! - Read a JSON provisioning plan from disk.
//! - Validate the plan's internal consistency.
//!
//! Invariants:
//! - Datasource keys are unique and non-empty.
//! - The folder UID is non-empty.

use std::collections::HashSet;
use std::path::Path;

use super::error::ConfigError;
use crate::types::ProvisionPlan;

/// Load a provisioning plan from a JSON file.
pub fn load_plan_file(path: &Path) -> Result<ProvisionPlan, ConfigError> {
    tracing::debug!(path = %path.display(), "Loading provisioning plan");

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::PlanFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let plan: ProvisionPlan =
        serde_json::from_str(&contents).map_err(|source| ConfigError::PlanFileParse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_plan(&plan)?;
    Ok(plan)
}

/// Check plan invariants the workflow relies on.
pub(crate) fn validate_plan(plan: &ProvisionPlan) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for ds in &plan.datasources {
        if ds.key.trim().is_empty() {
            return Err(ConfigError::InvalidPlan(format!(
                "datasource '{}' has an empty key",
                ds.name
            )));
        }
        if !seen.insert(ds.key.to_ascii_lowercase()) {
            return Err(ConfigError::InvalidPlan(format!(
                "duplicate datasource key '{}'",
                ds.key
            )));
        }
    }

    if plan.folder.uid.trim().is_empty() {
        return Err(ConfigError::InvalidPlan(
            "folder uid must not be empty".to_string(),
        ));
    }

    Ok(())
}
