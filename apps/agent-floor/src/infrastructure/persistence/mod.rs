//! Persistence Adapters
//!
//! In-memory implementations of `MarketStorePort` and `LogStorePort`.

mod in_memory;

pub use in_memory::{InMemoryLogStore, InMemoryMarketStore};
