//! Application Layer
//!
//! - `ports`: Interfaces for external systems (market data, stores, randomness)
//!   and the tracing callback interface we implement
//! - `services`: Price resolution and trace logging

pub mod ports;
pub mod services;
