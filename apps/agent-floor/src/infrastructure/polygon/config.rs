//! Polygon adapter configuration.

use std::time::Duration;

/// Production REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Polygon adapter.
#[derive(Clone)]
pub struct PolygonConfig {
    /// API key.
    pub api_key: String,
    /// REST base URL, without trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for PolygonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PolygonConfig {
    /// Create a configuration for the production endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the adapter at another base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
