//! HTTP client for fetching the source document
//!
//! Handles:
//! - URL validation before any request is made
//! - Default headers, timeout and user agent
//! - Error classification (transport failure vs. non-success status vs. bad JSON)

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Longest error-response body kept in an [`Error::HttpStatus`]
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("api-to-sql/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Add several default headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in headers {
            self.config.default_headers.insert(key.into(), value.into());
        }
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client used by the fetch stage
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Make a GET request, failing on any non-success status
    pub async fn get(&self, url: &str) -> Result<Response> {
        let url = parse_url(url)?;

        let mut req = self.client.get(url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        debug!("GET {}", url);
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} returned {}", url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), truncate_body(&body)));
        }

        debug!("Request succeeded: GET {} ({})", url, status.as_u16());
        Ok(response)
    }

    /// Make a GET request and parse the body as JSON
    ///
    /// The body is read as text first so that a malformed document is reported
    /// as a JSON parse error rather than a transport error.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.get(url).await?;
        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parse and validate a source URL
///
/// Only absolute `http` and `https` URLs are accepted.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|source| Error::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}
