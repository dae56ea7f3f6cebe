//! HTTP client wrapper for the Polygon REST API.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::api_types::PolygonErrorResponse;
use super::config::PolygonConfig;
use super::error::PolygonError;

/// Fallback delay when a 429 carries no `Retry-After` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Authenticated GET client. One attempt per request.
#[derive(Clone)]
pub struct PolygonHttpClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for PolygonHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonHttpClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PolygonHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &PolygonConfig) -> Result<Self, PolygonError> {
        if config.api_key.is_empty() {
            return Err(PolygonError::AuthenticationFailed(
                "API key is empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PolygonError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// GET `path` with query parameters and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PolygonError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "Polygon request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| PolygonError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| PolygonError::Network(e.to_string()))?;
            return serde_json::from_str(&text).map_err(|e| PolygonError::JsonParse(e.to_string()));
        }

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<PolygonErrorResponse>(&body)
            .ok()
            .and_then(PolygonErrorResponse::detail)
            .unwrap_or(body);

        Err(error_for_status(status, message, retry_after))
    }
}

fn error_for_status(status: StatusCode, message: String, retry_after: Option<u64>) -> PolygonError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PolygonError::AuthenticationFailed(message)
        }
        StatusCode::TOO_MANY_REQUESTS => PolygonError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        },
        _ => PolygonError::Api {
            code: status.as_u16().to_string(),
            message,
        },
    }
}
