//! Application Ports (Driver and Driven)
//!
//! - **Driven Ports** (Secondary/Outbound): market data provider, market and
//!   log stores, random source
//! - **Driver Ports** (Primary/Inbound): the trace processor callbacks the
//!   agent framework invokes

mod log_store_port;
mod market_data_port;
mod market_store_port;
mod random_port;
mod trace_processor_port;

pub use log_store_port::LogStorePort;
pub use market_data_port::{
    DailyClose, MarketDataError, MarketDataPort, MarketStatus, PreviousClose, TickerSnapshot,
};
pub use market_store_port::{MarketStorePort, StorageError};
pub use random_port::RandomSource;
pub use trace_processor_port::TraceProcessor;
