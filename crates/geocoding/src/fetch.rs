//! Network boundary
//!
//! The parsing core never touches the network. A [`Fetcher`] turns a fully
//! formed request URL into a response body; everything transport-related
//! (timeouts, HTTP status, redirects) is decided here.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::debug;

use crate::config::GeoConfig;
use crate::error::GeoError;

/// Retrieves response bodies for request URLs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the body behind `url` as text
    async fn fetch(&self, url: &str) -> Result<String, GeoError>;
}

/// reqwest-backed [`Fetcher`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the timeout and user agent from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeoConfig) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, GeoError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeoError::Timeout
            } else {
                GeoError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GeoError::Timeout
            } else {
                GeoError::ConnectionFailed(e.to_string())
            }
        })?;

        debug!(bytes = body.len(), "Fetched response body");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        let config = GeoConfig::for_testing();
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = GeoConfig::for_testing();
        let fetcher = HttpFetcher::new(&config).unwrap();

        let result = fetcher.fetch("http://127.0.0.1:1/maps/geo").await;
        assert!(matches!(
            result,
            Err(GeoError::ConnectionFailed(_) | GeoError::Timeout)
        ));
    }
}
