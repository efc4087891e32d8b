//! HTTP adapter for the node API port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::DataError;
use crate::ports::NodeApi;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// One-shot HTTP GET client for a node's REST API.
pub struct HttpNodeApi {
    client: Client,
    base_url: String,
}

impl HttpNodeApi {
    /// Create a client for a node endpoint, e.g. `http://localhost:7332`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DataError> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| DataError::Network {
                route: base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl NodeApi for HttpNodeApi {
    async fn get_text(&self, route: &str) -> Result<String, DataError> {
        let url = format!("{}{}", self.base_url, route);
        debug!("[explorer-data] GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Network {
                route: route.to_string(),
                reason: if e.is_connect() {
                    format!("cannot connect to {}", self.base_url)
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Network {
                route: route.to_string(),
                reason: format!("unexpected status {status}"),
            });
        }

        response.text().await.map_err(|e| DataError::Network {
            route: route.to_string(),
            reason: e.to_string(),
        })
    }
}
