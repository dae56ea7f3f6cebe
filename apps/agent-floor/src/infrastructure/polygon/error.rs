//! Polygon-specific error types.

use thiserror::Error;

use crate::application::ports::MarketDataError;

/// Errors from the Polygon adapter.
#[derive(Debug, Error, Clone)]
pub enum PolygonError {
    /// Request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error status.
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status or Polygon status string.
        code: String,
        /// Error message from the API.
        message: String,
    },

    /// Missing, invalid, or unentitled API key.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Response parsed but held no usable data.
    #[error("No data: {0}")]
    NoData(String),
}

impl From<PolygonError> for MarketDataError {
    fn from(err: PolygonError) -> Self {
        match err {
            PolygonError::Network(message) | PolygonError::JsonParse(message) => {
                Self::ConnectionError { message }
            }
            PolygonError::Api { code, message } => Self::ApiError {
                message: format!("{code}: {message}"),
            },
            PolygonError::AuthenticationFailed(_) => Self::AuthenticationFailed,
            PolygonError::RateLimited { retry_after_secs } => {
                Self::RateLimited { retry_after_secs }
            }
            PolygonError::NoData(message) => Self::DataUnavailable { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_maps_to_connection_error() {
        let err: MarketDataError = PolygonError::Network("connection refused".to_string()).into();
        assert!(matches!(err, MarketDataError::ConnectionError { .. }));
    }

    #[test]
    fn auth_maps_to_authentication_failed() {
        let err: MarketDataError = PolygonError::AuthenticationFailed("bad key".to_string()).into();
        assert!(matches!(err, MarketDataError::AuthenticationFailed));
    }

    #[test]
    fn rate_limit_keeps_delay() {
        let err: MarketDataError = PolygonError::RateLimited {
            retry_after_secs: 12,
        }
        .into();
        assert!(matches!(
            err,
            MarketDataError::RateLimited {
                retry_after_secs: 12
            }
        ));
    }

    #[test]
    fn no_data_maps_to_unavailable() {
        let err: MarketDataError = PolygonError::NoData("empty results".to_string()).into();
        assert!(matches!(err, MarketDataError::DataUnavailable { .. }));
    }
}
