//! HTTP access to the dataset endpoint.

use async_trait::async_trait;
use compute::{ComputeError, DatasetSource};
use gloo_net::http::Request;

/// Fetches the dataset from the page's own origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpDatasetSource;

#[async_trait(?Send)]
impl DatasetSource for HttpDatasetSource {
    async fn fetch_text(&self, path: &str) -> compute::Result<String> {
        log::debug!("GET request to: {}", path);

        let response = Request::get(path).send().await.map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", path, error_msg);
            ComputeError::Network(error_msg)
        })?;

        if !response.ok() {
            log::error!("GET {} - HTTP error: {}", path, response.status());
            return Err(ComputeError::Http(response.status()));
        }

        log::trace!("GET {} - Response received, reading body", path);
        let text = response.text().await.map_err(|e| {
            let error_msg = format!("Failed to read response: {}", e);
            log::error!("GET {} - {}", path, error_msg);
            ComputeError::Network(error_msg)
        })?;

        log::info!("GET {} - Success", path);
        Ok(text)
    }
}
