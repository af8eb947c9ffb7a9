//! # API Client
//!
//! HTTP client for the daemon's GUI endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::config::SyncConfig;
use crate::core::error::Result;
use crate::core::service::GuiApi;

/// HTTP client for the wallet daemon's GUI API.
///
/// One client is shared by every poll loop so requests reuse the same
/// connection pool.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the daemon at `base_url` (e.g. `http://localhost:4280`).
    ///
    /// Without a `timeout`, requests wait as long as the connection stays open.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, timeout = ?timeout, "HTTP client build failed - falling back to defaults without timeout");
            Client::new()
        });

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(config.api_base_url.clone(), config.request_timeout)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl GuiApi for ApiClient {
    async fn fetch(&self, endpoint: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:4280/", None);
        assert_eq!(client.base_url(), "http://localhost:4280");
        assert_eq!(client.url("/gui/heartbeat"), "http://localhost:4280/gui/heartbeat");
    }

    #[tokio::test]
    async fn test_unreachable_daemon_is_network_error() {
        // port 9 (discard) is not served on loopback in test environments
        let client = ApiClient::new("http://127.0.0.1:9", Some(Duration::from_secs(2)));
        let err = client.fetch("/gui/heartbeat").await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }
}
