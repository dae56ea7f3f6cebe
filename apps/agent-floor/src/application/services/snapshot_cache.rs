//! Bounded least-recently-used cache of daily market snapshots.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::domain::market::{DateKey, MarketSnapshot};

/// Snapshots kept in memory by default: today and yesterday.
pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 2;

/// Fixed-capacity LRU keyed by date.
///
/// Entries are ordered oldest-use first. Capacity is tiny, so a linear scan
/// beats hashing.
#[derive(Debug, Clone)]
pub struct SnapshotCache {
    capacity: usize,
    entries: VecDeque<(DateKey, Arc<MarketSnapshot>)>,
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_CAPACITY)
    }
}

impl SnapshotCache {
    /// Create a cache holding at most `capacity` dates (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Look up a date, marking it most recently used.
    pub fn get(&mut self, date: &DateKey) -> Option<Arc<MarketSnapshot>> {
        let pos = self.entries.iter().position(|(key, _)| key == date)?;
        let entry = self.entries.remove(pos)?;
        let snapshot = Arc::clone(&entry.1);
        self.entries.push_back(entry);
        Some(snapshot)
    }

    /// Insert or replace a date as most recently used.
    ///
    /// Returns the date evicted to make room, if any.
    pub fn insert(&mut self, date: DateKey, snapshot: Arc<MarketSnapshot>) -> Option<DateKey> {
        if let Some(pos) = self.entries.iter().position(|(key, _)| *key == date) {
            self.entries.remove(pos);
        }
        self.entries.push_back((date, snapshot));

        if self.entries.len() > self.capacity {
            self.entries.pop_front().map(|(key, _)| key)
        } else {
            None
        }
    }

    /// Whether `date` is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, date: &DateKey) -> bool {
        self.entries.iter().any(|(key, _)| key == date)
    }

    /// Cached dates, least recently used first.
    #[must_use]
    pub fn dates(&self) -> Vec<DateKey> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Number of cached dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of dates held.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(d: u32) -> DateKey {
        DateKey::new(NaiveDate::from_ymd_opt(2025, 1, d).unwrap())
    }

    fn snap(close: f64) -> Arc<MarketSnapshot> {
        Arc::new([("SPY", close)].into_iter().collect())
    }

    #[test]
    fn third_date_evicts_least_recent() {
        let mut cache = SnapshotCache::default();
        assert_eq!(cache.insert(day(1), snap(1.0)), None);
        assert_eq!(cache.insert(day(2), snap(2.0)), None);
        assert_eq!(cache.insert(day(3), snap(3.0)), Some(day(1)));

        assert_eq!(cache.dates(), vec![day(2), day(3)]);
    }

    #[test]
    fn get_refreshes_recency() {
        let mut cache = SnapshotCache::default();
        cache.insert(day(1), snap(1.0));
        cache.insert(day(2), snap(2.0));

        assert!(cache.get(&day(1)).is_some());
        assert_eq!(cache.insert(day(3), snap(3.0)), Some(day(2)));
        assert!(cache.contains(&day(1)));
    }

    #[test]
    fn reinsert_replaces_without_growing() {
        let mut cache = SnapshotCache::default();
        cache.insert(day(1), snap(1.0));
        cache.insert(day(1), snap(9.0));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&day(1)).unwrap().close("SPY"), Some(9.0));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let cache = SnapshotCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(days in proptest::collection::vec(1u32..=28, 0..64)) {
            let mut cache = SnapshotCache::default();
            for d in &days {
                cache.insert(day(*d), snap(f64::from(*d)));
                prop_assert!(cache.len() <= DEFAULT_SNAPSHOT_CAPACITY);
            }
            if let Some(last) = days.last() {
                prop_assert!(cache.contains(&day(*last)));
            }
        }
    }
}
