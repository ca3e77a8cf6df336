//! HTTP client for the search provider.
//!
//! One GET per query with `q`, `api_key`, and `engine` parameters. No
//! retries and no backoff; a failed call surfaces as a tagged error.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use parley_core::config::SearchConfig;

use crate::error::SearchError;
use crate::types::SearchResponse;

/// The outbound search seam.
///
/// The responder depends on this trait rather than on the concrete HTTP
/// client, so tests can substitute a stub provider.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Issue one search query and return the provider's typed response.
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError>;
}

/// Search provider client.
pub struct SearchClient {
    config: SearchConfig,
    client: reqwest::Client,
}

impl SearchClient {
    /// Create a new client with a timeout from the configuration.
    pub fn new(config: SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    /// Create a new client with a shared HTTP client.
    pub fn with_client(config: SearchConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl SearchProvider for SearchClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        debug!(query = %query, "Issuing search request");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("q", query),
                ("api_key", self.config.api_key.as_str()),
                ("engine", self.config.engine.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("endpoint", &self.config.endpoint)
            .field("engine", &self.config.engine)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let config = SearchConfig::default();
        let client = SearchClient::new(config);
        let dbg = format!("{:?}", client);
        assert!(dbg.contains("searchapi.io"));
        // The API key must never appear in debug output.
        assert!(!dbg.contains("api_key"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let config = SearchConfig {
            // Reserved TEST-NET address; connections fail fast.
            endpoint: "http://192.0.2.1:9/search".to_string(),
            api_key: "key".to_string(),
            engine: "google".to_string(),
            timeout_secs: 1,
        };
        let client = SearchClient::new(config);

        let err = client.search("who is Ada Lovelace").await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
