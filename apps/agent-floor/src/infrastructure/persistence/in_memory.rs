//! In-memory market and log stores.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{LogStorePort, MarketStorePort, StorageError};
use crate::domain::market::{DateKey, MarketSnapshot};
use crate::domain::trace::LogEvent;

/// In-memory implementation of `MarketStorePort`.
///
/// Lives for the process only. Suitable for testing and development.
#[derive(Debug, Default)]
pub struct InMemoryMarketStore {
    markets: RwLock<HashMap<DateKey, MarketSnapshot>>,
    writes: AtomicUsize,
}

impl InMemoryMarketStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a snapshot (for test setup). Not counted as a write.
    pub fn add(&self, date: DateKey, snapshot: MarketSnapshot) {
        self.markets.write().insert(date, snapshot);
    }

    /// Number of stored dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.read().len()
    }

    /// Whether no dates are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.read().is_empty()
    }

    /// Number of `write_market` calls served.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MarketStorePort for InMemoryMarketStore {
    async fn read_market(&self, date: &DateKey) -> Result<Option<MarketSnapshot>, StorageError> {
        Ok(self.markets.read().get(date).cloned())
    }

    async fn write_market(
        &self,
        date: &DateKey,
        snapshot: &MarketSnapshot,
    ) -> Result<(), StorageError> {
        self.markets.write().insert(*date, snapshot.clone());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// In-memory implementation of `LogStorePort`.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    events: RwLock<Vec<LogEvent>>,
}

impl InMemoryLogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in write order.
    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.read().clone()
    }

    /// The most recent `last_n` events for `name`, oldest first.
    #[must_use]
    pub fn read_log(&self, name: &str, last_n: usize) -> Vec<LogEvent> {
        let events = self.events.read();
        let mut recent: Vec<LogEvent> = events
            .iter()
            .rev()
            .filter(|e| e.name == name)
            .take(last_n)
            .cloned()
            .collect();
        recent.reverse();
        recent
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether no events were written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Remove all events.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl LogStorePort for InMemoryLogStore {
    fn write_log(&self, event: &LogEvent) -> Result<(), StorageError> {
        self.events.write().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[tokio::test]
    async fn write_then_read_market() {
        let store = InMemoryMarketStore::new();
        let snapshot: MarketSnapshot = [("AAPL", 190.0), ("MSFT", 410.0)].into_iter().collect();

        store.write_market(&key("2025-01-02"), &snapshot).await.unwrap();

        let found = store.read_market(&key("2025-01-02")).await.unwrap();
        assert_eq!(found, Some(snapshot));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn read_missing_market() {
        let store = InMemoryMarketStore::new();
        assert!(store.read_market(&key("2025-01-02")).await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn read_log_returns_latest_for_name() {
        let store = InMemoryLogStore::new();
        for i in 0..5 {
            store
                .write_log(&LogEvent::new("alpha", "trace", format!("m{i}")))
                .unwrap();
            store
                .write_log(&LogEvent::new("beta", "trace", format!("b{i}")))
                .unwrap();
        }

        let recent: Vec<String> = store
            .read_log("alpha", 2)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(recent, vec!["m3", "m4"]);
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn clear_empties_log() {
        let store = InMemoryLogStore::new();
        store.write_log(&LogEvent::new("alpha", "span", "Started")).unwrap();
        store.clear();
        assert!(store.is_empty());
    }
}
