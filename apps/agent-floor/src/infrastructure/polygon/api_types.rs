//! Polygon REST response types.

use serde::Deserialize;

/// `GET /v1/marketstatus/now`
#[derive(Debug, Deserialize)]
pub struct MarketStatusResponse {
    pub market: String,
}

/// Aggregate responses: previous close and grouped daily.
#[derive(Debug, Deserialize)]
pub struct AggregatesResponse {
    #[serde(default)]
    pub results: Vec<AggregateBar>,
}

#[derive(Debug, Deserialize)]
pub struct AggregateBar {
    /// Ticker symbol.
    #[serde(rename = "T")]
    pub ticker: Option<String>,
    /// Close price.
    #[serde(rename = "c")]
    pub close: f64,
    /// Window start, Unix milliseconds.
    #[serde(rename = "t")]
    pub timestamp: Option<i64>,
}

/// `GET /v2/snapshot/locale/us/markets/stocks/tickers/{ticker}`
#[derive(Debug, Deserialize)]
pub struct SnapshotResponse {
    pub ticker: SnapshotTicker,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotTicker {
    #[serde(default)]
    pub min: Option<SnapshotBar>,
    #[serde(default, rename = "prevDay")]
    pub prev_day: Option<SnapshotBar>,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotBar {
    #[serde(default, rename = "c")]
    pub close: Option<f64>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct PolygonErrorResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PolygonErrorResponse {
    pub fn detail(self) -> Option<String> {
        self.error.or(self.message).or(self.status)
    }
}
