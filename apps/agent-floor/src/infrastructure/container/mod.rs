//! Dependency Injection Container
//!
//! Wires the Polygon adapter, in-memory stores, price resolver and log tracer
//! from an [`AppConfig`].

use std::sync::Arc;

use crate::application::services::{LogTracer, PriceResolver};
use crate::config::AppConfig;
use crate::infrastructure::persistence::{InMemoryLogStore, InMemoryMarketStore};
use crate::infrastructure::polygon::{PolygonError, PolygonMarketDataAdapter};
use crate::infrastructure::random::ThreadRandom;

/// Concrete price resolver used by the binary.
pub type AppPriceResolver = PriceResolver<PolygonMarketDataAdapter, InMemoryMarketStore>;

/// Concrete log tracer used by the binary.
pub type AppLogTracer = LogTracer<InMemoryLogStore>;

/// Holds all wired dependencies for the application.
#[derive(Debug)]
pub struct Container {
    price_resolver: Arc<AppPriceResolver>,
    market_store: Arc<InMemoryMarketStore>,
    log_store: Arc<InMemoryLogStore>,
    tracer: Arc<AppLogTracer>,
}

impl Container {
    /// Build every component from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a Polygon key is configured but the HTTP client
    /// cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, PolygonError> {
        let provider = config
            .polygon()
            .map(|polygon| PolygonMarketDataAdapter::new(&polygon).map(Arc::new))
            .transpose()?;

        let market_store = Arc::new(InMemoryMarketStore::new());
        let log_store = Arc::new(InMemoryLogStore::new());

        let price_resolver = Arc::new(PriceResolver::new(
            provider,
            Arc::clone(&market_store),
            config.plan,
            Arc::new(ThreadRandom),
        ));
        let tracer = Arc::new(LogTracer::new(Arc::clone(&log_store)));

        Ok(Self {
            price_resolver,
            market_store,
            log_store,
            tracer,
        })
    }

    /// Get the price resolver.
    pub fn price_resolver(&self) -> Arc<AppPriceResolver> {
        Arc::clone(&self.price_resolver)
    }

    /// Get the market store.
    pub fn market_store(&self) -> Arc<InMemoryMarketStore> {
        Arc::clone(&self.market_store)
    }

    /// Get the log store.
    pub fn log_store(&self) -> Arc<InMemoryLogStore> {
        Arc::clone(&self.log_store)
    }

    /// Get the log tracer.
    pub fn tracer(&self) -> Arc<AppLogTracer> {
        Arc::clone(&self.tracer)
    }
}
