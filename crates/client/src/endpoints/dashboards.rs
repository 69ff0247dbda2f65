//! Dashboard endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{DashboardImportRequest, DashboardImportResult};

/// Create or overwrite a dashboard.
pub async fn import_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    request: &DashboardImportRequest,
    max_retries: usize,
) -> Result<DashboardImportResult> {
    let url = format!("{}/api/dashboards/db", base_url);

    let builder = auth.apply(client.post(&url)).json(request);

    let response =
        send_request_with_retry(builder, max_retries, "/api/dashboards/db", "POST").await?;

    response.json::<DashboardImportResult>().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse dashboard import result: {}", e))
    })
}
