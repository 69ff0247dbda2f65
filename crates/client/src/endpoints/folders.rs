//! Folder endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{Folder, NewFolder};

/// Create a folder.
///
/// Returns the created folder, or `None` when it already exists. Grafana
/// reports an existing folder with 409 (same title) or 412 (same uid,
/// depending on version).
pub async fn create_folder(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    folder: &NewFolder,
    max_retries: usize,
) -> Result<Option<Folder>> {
    let url = format!("{}/api/folders", base_url);

    let builder = auth.apply(client.post(&url)).json(folder);

    match send_request_with_retry(builder, max_retries, "/api/folders", "POST").await {
        Ok(response) => {
            let folder: Folder = response.json().await.map_err(|e| {
                ClientError::InvalidResponse(format!("Failed to parse created folder: {}", e))
            })?;
            Ok(Some(folder))
        }
        Err(ClientError::ApiError {
            status: 409 | 412, ..
        }) => Ok(None),
        Err(e) => Err(e),
    }
}
