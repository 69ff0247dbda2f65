//! REST API endpoint implementations.
//!
//! Each function performs exactly one Grafana API call. Higher-level
//! behaviour (readiness polling, file handling, the provisioning workflow)
//! lives on [`crate::GrafanaClient`].

mod alert_rules;
mod dashboards;
mod datasources;
mod folders;
mod health;
mod request;
pub mod url_encoding;

pub use alert_rules::create_alert_rule;
pub use dashboards::import_dashboard;
pub use datasources::{create_datasource, get_datasource_by_name};
pub use folders::create_folder;
pub use health::get_health;
pub use request::send_request_with_retry;
