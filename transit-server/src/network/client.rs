//! HTTP client for the transit network feed.

use tracing::debug;

use crate::domain::Line;

use super::error::NetworkError;

/// Default feed URL: a JSON array of `{ "Name", "Stations" }` records.
pub const DEFAULT_NETWORK_URL: &str = "http://fantasy-transit.appspot.com/net?format=json";

/// Configuration for the network feed client.
#[derive(Debug, Clone)]
pub struct NetworkClientConfig {
    /// URL of the JSON feed
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NetworkClientConfig {
    /// Create a config for the given feed URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NetworkClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_URL)
    }
}

/// Client for the transit network feed.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    url: String,
}

impl NetworkClient {
    /// Create a new feed client.
    pub fn new(config: NetworkClientConfig) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The feed URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch all lines from the feed.
    pub async fn fetch_lines(&self) -> Result<Vec<Line>, NetworkError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let lines = parse_lines(&body)?;

        debug!(url = %self.url, lines = lines.len(), "Fetched transit network");

        Ok(lines)
    }
}

/// Parse a feed body into lines.
pub fn parse_lines(body: &str) -> Result<Vec<Line>, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::Json {
        message: e.to_string(),
    })
}
