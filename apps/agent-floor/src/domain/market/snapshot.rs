//! Full-market closing prices for one trading date.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Closing price per ticker for a single trading date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketSnapshot(HashMap<String, f64>);

impl MarketSnapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Record the close for a ticker.
    pub fn insert(&mut self, ticker: impl Into<String>, close: f64) {
        self.0.insert(ticker.into(), close);
    }

    /// Close for a ticker, if it traded that day.
    #[must_use]
    pub fn close(&self, ticker: &str) -> Option<f64> {
        self.0.get(ticker).copied()
    }

    /// Close for a ticker, `0.0` when it is absent from the day's results.
    #[must_use]
    pub fn price_or_zero(&self, ticker: &str) -> f64 {
        self.close(ticker).unwrap_or(0.0)
    }

    /// Number of tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no tickers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MarketSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
