//! Polygon.io Market Data Adapter
//!
//! Implementation of `MarketDataPort` over Polygon's REST API:
//! - Market status
//! - Previous close for a single ticker
//! - Grouped daily closes for the whole US stock market
//! - Latest ticker snapshot (minute-level plans)
//!
//! Each call is attempted once; there is no retry.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::PolygonMarketDataAdapter;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PolygonConfig};
pub use error::PolygonError;
