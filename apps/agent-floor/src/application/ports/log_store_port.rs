//! Log Store Port (Driven Port)
//!
//! Append-only sink for agent log lines. Synchronous: trace callbacks are
//! invoked inline by the agent framework.

use super::market_store_port::StorageError;
use crate::domain::trace::LogEvent;

/// Port for appending log events.
pub trait LogStorePort: Send + Sync {
    /// Append one event.
    fn write_log(&self, event: &LogEvent) -> Result<(), StorageError>;
}
