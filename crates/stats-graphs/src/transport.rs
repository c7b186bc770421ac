//! reqwest-backed transport to the local backend.

use crate::traits::{Transport, TransportResponse};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use stats_common::{Result, StatsError};
use stats_config::BackendConfig;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// HTTP transport with a shared connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            StatsError::config_with_source(format!("invalid base URL '{base_url}'"), e)
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StatsError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, base_url })
    }

    /// Creates a transport from the backend section of the configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }


    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            StatsError::config_with_source(format!("invalid request path '{path}'"), e)
        })
    }
}

/// Reason phrase for a status, or the bare code when it has none.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), ToString::to_string)
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body), fields(body_len = body.len()))]
    async fn post(&self, path: &str, body: Vec<u8>) -> Result<TransportResponse> {
        let url = self.endpoint(path)?;
        debug!(%url, "Sending request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request failed: {}", e);
                if e.is_timeout() {
                    StatsError::network_with_source("Request timeout", e)
                } else if e.is_connect() {
                    StatsError::network_with_source("Connection error", e)
                } else {
                    StatsError::network_with_source("Request failed", e)
                }
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| StatsError::network_with_source("Failed to read response body", e))?;

        debug!(%status, len = body.len(), "Received reply");
        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status_text(status),
            body: body.to_vec(),
        })
    }
}
