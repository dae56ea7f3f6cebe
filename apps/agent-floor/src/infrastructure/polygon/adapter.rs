//! Polygon `MarketDataPort` implementation.

use async_trait::async_trait;

use super::api_types::{AggregatesResponse, MarketStatusResponse, SnapshotResponse};
use super::config::PolygonConfig;
use super::error::PolygonError;
use super::http_client::PolygonHttpClient;
use crate::application::ports::{
    DailyClose, MarketDataError, MarketDataPort, MarketStatus, PreviousClose, TickerSnapshot,
};
use crate::domain::market::DateKey;

/// Polygon market data adapter.
#[derive(Debug, Clone)]
pub struct PolygonMarketDataAdapter {
    http: PolygonHttpClient,
}

impl PolygonMarketDataAdapter {
    /// Create a new adapter.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or the HTTP client cannot be built.
    pub fn new(config: &PolygonConfig) -> Result<Self, PolygonError> {
        Ok(Self {
            http: PolygonHttpClient::new(config)?,
        })
    }

    async fn fetch_market_status(&self) -> Result<MarketStatus, PolygonError> {
        let response: MarketStatusResponse = self.http.get("/v1/marketstatus/now", &[]).await?;
        Ok(MarketStatus {
            market: response.market,
        })
    }

    async fn fetch_previous_close(&self, ticker: &str) -> Result<PreviousClose, PolygonError> {
        let path = format!("/v2/aggs/ticker/{ticker}/prev");
        let response: AggregatesResponse = self.http.get(&path, &[("adjusted", "true")]).await?;

        let bar = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| PolygonError::NoData(format!("No previous close for {ticker}")))?;
        let timestamp_ms = bar.timestamp.ok_or_else(|| {
            PolygonError::NoData(format!("Previous close for {ticker} has no timestamp"))
        })?;

        Ok(PreviousClose {
            ticker: bar.ticker.unwrap_or_else(|| ticker.to_string()),
            close: bar.close,
            timestamp_ms,
        })
    }

    async fn fetch_grouped_daily(
        &self,
        date: DateKey,
        adjusted: bool,
        include_otc: bool,
    ) -> Result<Vec<DailyClose>, PolygonError> {
        let path = format!("/v2/aggs/grouped/locale/us/market/stocks/{date}");
        let query = [
            ("adjusted", bool_param(adjusted)),
            ("include_otc", bool_param(include_otc)),
        ];
        let response: AggregatesResponse = self.http.get(&path, &query).await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(|bar| {
                bar.ticker.map(|ticker| DailyClose {
                    ticker,
                    close: bar.close,
                })
            })
            .collect())
    }

    async fn fetch_ticker_snapshot(&self, ticker: &str) -> Result<TickerSnapshot, PolygonError> {
        let path = format!("/v2/snapshot/locale/us/markets/stocks/tickers/{ticker}");
        let response: SnapshotResponse = self.http.get(&path, &[]).await?;

        Ok(TickerSnapshot {
            minute_close: response.ticker.min.and_then(|bar| bar.close),
            prev_day_close: response.ticker.prev_day.and_then(|bar| bar.close),
        })
    }
}

const fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[async_trait]
impl MarketDataPort for PolygonMarketDataAdapter {
    async fn market_status(&self) -> Result<MarketStatus, MarketDataError> {
        Ok(self.fetch_market_status().await?)
    }

    async fn previous_close(&self, ticker: &str) -> Result<PreviousClose, MarketDataError> {
        Ok(self.fetch_previous_close(ticker).await?)
    }

    async fn grouped_daily(
        &self,
        date: DateKey,
        adjusted: bool,
        include_otc: bool,
    ) -> Result<Vec<DailyClose>, MarketDataError> {
        Ok(self.fetch_grouped_daily(date, adjusted, include_otc).await?)
    }

    async fn ticker_snapshot(&self, ticker: &str) -> Result<TickerSnapshot, MarketDataError> {
        Ok(self.fetch_ticker_snapshot(ticker).await?)
    }
}
