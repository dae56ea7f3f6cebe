//! Application Services
//!
//! - `PriceResolver`: share price lookup with provider tiers and random fallback
//! - `SnapshotCache`: bounded LRU of daily market snapshots
//! - `LogTracer`: trace processor that writes agent log lines

mod log_tracer;
mod price_resolver;
mod snapshot_cache;

pub use log_tracer::LogTracer;
pub use price_resolver::{FALLBACK_PRICE_RANGE, PriceError, PriceResolver, REFERENCE_TICKER};
pub use snapshot_cache::{DEFAULT_SNAPSHOT_CAPACITY, SnapshotCache};
