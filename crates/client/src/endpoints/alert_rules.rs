//! Alert rule provisioning endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::ProvisionedAlertRule;

/// Header that keeps provisioned rules editable in the Grafana UI.
const DISABLE_PROVENANCE_HEADER: &str = "X-Disable-Provenance";

/// Create one alert rule through the provisioning API.
pub async fn create_alert_rule(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    rule: &serde_json::Value,
    max_retries: usize,
) -> Result<ProvisionedAlertRule> {
    let url = format!("{}/api/v1/provisioning/alert-rules", base_url);

    let builder = auth
        .apply(client.post(&url))
        .header(DISABLE_PROVENANCE_HEADER, "true")
        .json(rule);

    let response = send_request_with_retry(
        builder,
        max_retries,
        "/api/v1/provisioning/alert-rules",
        "POST",
    )
    .await?;

    response.json::<ProvisionedAlertRule>().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse provisioned alert rule: {}", e))
    })
}
