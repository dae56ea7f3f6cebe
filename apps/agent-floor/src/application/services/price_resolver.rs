//! Share price resolution.
//!
//! Prefers the live provider, caches end-of-day snapshots, and falls back to
//! a random filler price whenever no key is configured or a lookup fails.

use std::sync::Arc;

use parking_lot::Mutex;

use super::snapshot_cache::SnapshotCache;
use crate::application::ports::{
    MarketDataError, MarketDataPort, MarketStorePort, RandomSource, StorageError,
};
use crate::domain::market::{DateKey, MarketSnapshot, PlanTier};

/// Ticker whose previous close anchors the last completed trading date.
pub const REFERENCE_TICKER: &str = "SPY";

/// Inclusive range of filler prices.
pub const FALLBACK_PRICE_RANGE: (u32, u32) = (1, 100);

/// Errors from provider-backed price lookups.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// No provider key configured.
    #[error("No market data provider configured")]
    ProviderUnavailable,

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] MarketDataError),

    /// The market store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Resolves ticker symbols to prices.
pub struct PriceResolver<P, S> {
    provider: Option<Arc<P>>,
    store: Arc<S>,
    tier: PlanTier,
    random: Arc<dyn RandomSource>,
    cache: Mutex<SnapshotCache>,
}

impl<P, S> std::fmt::Debug for PriceResolver<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceResolver")
            .field("tier", &self.tier)
            .field("has_provider", &self.provider.is_some())
            .field("cached_dates", &self.cache.lock().dates())
            .finish_non_exhaustive()
    }
}

impl<P, S> PriceResolver<P, S>
where
    P: MarketDataPort,
    S: MarketStorePort,
{
    /// Create a resolver. `provider` is `None` when no API key is configured;
    /// `random` supplies filler prices.
    pub fn new(
        provider: Option<Arc<P>>,
        store: Arc<S>,
        tier: PlanTier,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            provider,
            store,
            tier,
            random,
            cache: Mutex::new(SnapshotCache::default()),
        }
    }

    /// Replace the in-memory snapshot cache.
    #[must_use]
    pub fn with_cache(mut self, cache: SnapshotCache) -> Self {
        self.cache = Mutex::new(cache);
        self
    }

    /// Configured plan tier.
    pub const fn tier(&self) -> PlanTier {
        self.tier
    }

    /// Whether a provider is configured.
    pub const fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Dates currently held in memory, least recently used first.
    pub fn cached_dates(&self) -> Vec<DateKey> {
        self.cache.lock().dates()
    }

    /// Current price for `symbol`. Never fails.
    ///
    /// Without a provider, or when the provider lookup fails, returns a random
    /// whole-number price in [`FALLBACK_PRICE_RANGE`].
    pub async fn get_share_price(&self, symbol: &str) -> f64 {
        if self.provider.is_some() {
            match self.get_share_price_provider(symbol).await {
                Ok(price) => return price,
                Err(e) => {
                    tracing::warn!(
                        symbol = %symbol,
                        error = %e,
                        "Was not able to use the market data API; using a random number"
                    );
                }
            }
        }
        self.random_price()
    }

    /// Provider-backed price, minute-level on the minute tier, end-of-day otherwise.
    pub async fn get_share_price_provider(&self, symbol: &str) -> Result<f64, PriceError> {
        if self.tier.uses_minute_data() {
            self.get_share_price_min(symbol).await
        } else {
            self.get_share_price_eod(symbol).await
        }
    }

    /// Latest minute close, or the previous day's close. Not cached.
    pub async fn get_share_price_min(&self, symbol: &str) -> Result<f64, PriceError> {
        let snapshot = self.provider()?.ticker_snapshot(symbol).await?;
        snapshot.latest_close().ok_or_else(|| {
            PriceError::Provider(MarketDataError::DataUnavailable {
                message: format!("No minute or previous-day close for {symbol}"),
            })
        })
    }

    /// Close from the prior trading day's snapshot; `0.0` if the symbol did
    /// not trade.
    pub async fn get_share_price_eod(&self, symbol: &str) -> Result<f64, PriceError> {
        let market = self.get_market_for_prior_date(DateKey::today()).await?;
        Ok(market.price_or_zero(symbol))
    }

    /// Snapshot for `date`: memory, then store, then one bulk provider call.
    ///
    /// A freshly fetched snapshot is written to the store before caching.
    pub async fn get_market_for_prior_date(
        &self,
        date: DateKey,
    ) -> Result<Arc<MarketSnapshot>, PriceError> {
        let cached = self.cache.lock().get(&date);
        if let Some(snapshot) = cached {
            tracing::debug!(date = %date, "Market snapshot served from memory");
            return Ok(snapshot);
        }

        let snapshot = match self.store.read_market(&date).await? {
            Some(stored) if !stored.is_empty() => {
                tracing::debug!(
                    date = %date,
                    tickers = stored.len(),
                    "Market snapshot loaded from store"
                );
                stored
            }
            _ => {
                let fetched = self.get_all_share_prices_eod().await?;
                self.store.write_market(&date, &fetched).await?;
                tracing::info!(date = %date, tickers = fetched.len(), "Market snapshot fetched");
                fetched
            }
        };

        let snapshot = Arc::new(snapshot);
        let evicted = self.cache.lock().insert(date, Arc::clone(&snapshot));
        if let Some(evicted) = evicted {
            tracing::debug!(date = %evicted, "Market snapshot evicted from memory");
        }
        Ok(snapshot)
    }

    /// Every ticker's close on the last completed trading date.
    ///
    /// The date comes from the reference ticker's previous close, read in
    /// UTC, so the local timezone cannot shift it.
    pub async fn get_all_share_prices_eod(&self) -> Result<MarketSnapshot, PriceError> {
        let provider = self.provider()?;

        let probe = provider.previous_close(REFERENCE_TICKER).await?;
        let last_close = DateKey::from_timestamp_millis(probe.timestamp_ms).ok_or_else(|| {
            PriceError::Provider(MarketDataError::DataUnavailable {
                message: format!("Invalid previous close timestamp {}", probe.timestamp_ms),
            })
        })?;

        let results = provider.grouped_daily(last_close, true, false).await?;
        Ok(results.into_iter().map(|r| (r.ticker, r.close)).collect())
    }

    /// Whether the market is open right now. Failures propagate.
    pub async fn is_market_open(&self) -> Result<bool, PriceError> {
        let status = self.provider()?.market_status().await?;
        Ok(status.is_open())
    }

    fn provider(&self) -> Result<&P, PriceError> {
        self.provider
            .as_deref()
            .ok_or(PriceError::ProviderUnavailable)
    }

    fn random_price(&self) -> f64 {
        let (low, high) = FALLBACK_PRICE_RANGE;
        f64::from(self.random.int_inclusive(low, high))
    }
}
