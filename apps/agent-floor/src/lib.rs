// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::items_after_statements
    )
)]

//! Agent Floor - Share Prices and Agent Trace Logging
//!
//! Two adapters used by the agent trading floor:
//!
//! - **Price resolution**: ticker → price from Polygon, minute-level or
//!   end-of-day depending on plan, with the daily snapshot cached and
//!   persisted. Falls back to a random price when no key is configured or a
//!   lookup fails.
//! - **Trace logging**: a trace processor that turns trace/span lifecycle
//!   callbacks into log lines attributed to the agent named in the trace id.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: `market` (snapshots, date keys, plan tiers) and `trace`
//!   (trace ids, spans, log events)
//! - **Application**: `ports` (`MarketDataPort`, `MarketStorePort`,
//!   `LogStorePort`, `RandomSource`, `TraceProcessor`) and `services`
//!   (`PriceResolver`, `SnapshotCache`, `LogTracer`)
//! - **Infrastructure**: Polygon adapter, in-memory stores, random source,
//!   dependency container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core types with no external dependencies.
pub mod domain;

/// Application layer - Services and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

pub mod config;
pub mod telemetry;

// Domain re-exports
pub use domain::market::{DateKey, MarketSnapshot, PlanTier};
pub use domain::trace::{
    LogEvent, Span, SpanData, SpanError, SpanKind, Trace, TraceIdError, extract_name,
    make_trace_id,
};

// Application re-exports
pub use application::ports::{
    LogStorePort, MarketDataError, MarketDataPort, MarketStorePort, RandomSource, StorageError,
    TraceProcessor,
};
pub use application::services::{LogTracer, PriceError, PriceResolver, SnapshotCache};

// Infrastructure re-exports
pub use config::{AppConfig, ConfigError};
pub use infrastructure::container::Container;
pub use infrastructure::persistence::{InMemoryLogStore, InMemoryMarketStore};
pub use infrastructure::polygon::{PolygonConfig, PolygonError, PolygonMarketDataAdapter};
pub use infrastructure::random::ThreadRandom;
