use crate::config::Config;
use archive_shared::{Dataset, LoadError};
use gloo_net::http::Request;
use log::{debug, info};

/// Fetches and validates the archive document. Called once per page session;
/// failures are returned to the caller and never retried.
pub async fn fetch_dataset() -> Result<Dataset, LoadError> {
    let url = Config::dataset_url();
    debug!("Fetching contest data from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let dataset = Dataset::from_json_str(&body)?;
    info!("Fetched {} contests from {}", dataset.len(), url);
    Ok(dataset)
}
