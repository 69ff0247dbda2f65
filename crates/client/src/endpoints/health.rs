//! Health endpoint.

use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::models::HealthStatus;

/// Check Grafana's health.
///
/// `GET /api/health` needs no credentials. Only HTTP 200 counts as healthy;
/// Grafana answers 503 while its database is still migrating.
pub async fn get_health(client: &Client, base_url: &str) -> Result<HealthStatus> {
    let url = format!("{}/api/health", base_url);

    let response = client.get(&url).send().await?;
    let status = response.status().as_u16();

    if status != 200 {
        let message = response.text().await.unwrap_or_default();
        return Err(ClientError::ApiError {
            status,
            url,
            message,
        });
    }

    // Older Grafana versions answer with an empty or non-JSON body
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).unwrap_or_default())
}
