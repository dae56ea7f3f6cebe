//! Market Store Port (Driven Port)
//!
//! Persistence for daily market snapshots, keyed by date.

use async_trait::async_trait;

use crate::domain::market::{DateKey, MarketSnapshot};

/// Storage error shared by the market and log stores.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// Backend could not be reached or refused the operation.
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Stored data could not be encoded or decoded.
    #[error("Storage serialization error: {message}")]
    Serialization {
        /// Error details.
        message: String,
    },
}

/// Port for persisting market snapshots across runs.
#[async_trait]
pub trait MarketStorePort: Send + Sync {
    /// Snapshot stored for `date`, if any.
    async fn read_market(&self, date: &DateKey) -> Result<Option<MarketSnapshot>, StorageError>;

    /// Store the snapshot for `date`, replacing any previous one.
    async fn write_market(
        &self,
        date: &DateKey,
        snapshot: &MarketSnapshot,
    ) -> Result<(), StorageError>;
}
