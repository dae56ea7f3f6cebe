//! Market Data Port (Driven Port)
//!
//! Interface for the market data provider queries the price resolver needs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::market::DateKey;

/// Current state of the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStatus {
    /// Overall market state: `open`, `closed`, `extended-hours`.
    pub market: String,
}

impl MarketStatus {
    /// Whether regular trading is in session.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.market == "open"
    }
}

/// Previous trading day's aggregate for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviousClose {
    /// Ticker symbol.
    pub ticker: String,
    /// Closing price.
    pub close: f64,
    /// Start of the aggregate window, Unix milliseconds.
    pub timestamp_ms: i64,
}

/// One ticker's close in a grouped daily response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyClose {
    /// Ticker symbol.
    pub ticker: String,
    /// Closing price.
    pub close: f64,
}

/// Latest intraday view of a ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    /// Close of the most recent minute bar.
    pub minute_close: Option<f64>,
    /// Previous trading day's close.
    pub prev_day_close: Option<f64>,
}

impl TickerSnapshot {
    /// Most recent minute close, else the previous day's close.
    ///
    /// A zero minute close means no bar yet and is skipped.
    #[must_use]
    pub fn latest_close(&self) -> Option<f64> {
        self.minute_close
            .filter(|close| *close != 0.0)
            .or(self.prev_day_close)
    }
}

/// Market data error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarketDataError {
    /// Connection error.
    #[error("Market data connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Authentication failed.
    #[error("Market data authentication failed")]
    AuthenticationFailed,

    /// Data unavailable.
    #[error("Market data unavailable: {message}")]
    DataUnavailable {
        /// Error details.
        message: String,
    },

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// API error.
    #[error("Market data API error: {message}")]
    ApiError {
        /// Error details.
        message: String,
    },
}

/// Port for fetching market data from an external provider.
#[async_trait]
pub trait MarketDataPort: Send + Sync {
    /// Current market status.
    async fn market_status(&self) -> Result<MarketStatus, MarketDataError>;

    /// Previous trading day's aggregate for a ticker.
    async fn previous_close(&self, ticker: &str) -> Result<PreviousClose, MarketDataError>;

    /// Closing prices for every ticker on `date`.
    async fn grouped_daily(
        &self,
        date: DateKey,
        adjusted: bool,
        include_otc: bool,
    ) -> Result<Vec<DailyClose>, MarketDataError>;

    /// Latest intraday snapshot for a stock ticker.
    async fn ticker_snapshot(&self, ticker: &str) -> Result<TickerSnapshot, MarketDataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_status_open() {
        let status = MarketStatus {
            market: "open".to_string(),
        };
        assert!(status.is_open());

        let status = MarketStatus {
            market: "extended-hours".to_string(),
        };
        assert!(!status.is_open());
    }

    #[test]
    fn latest_close_prefers_minute_bar() {
        let snapshot = TickerSnapshot {
            minute_close: Some(101.5),
            prev_day_close: Some(99.0),
        };
        assert_eq!(snapshot.latest_close(), Some(101.5));
    }

    #[test]
    fn latest_close_falls_back_to_previous_day() {
        let snapshot = TickerSnapshot {
            minute_close: Some(0.0),
            prev_day_close: Some(99.0),
        };
        assert_eq!(snapshot.latest_close(), Some(99.0));
        assert_eq!(TickerSnapshot::default().latest_close(), None);
    }
}
