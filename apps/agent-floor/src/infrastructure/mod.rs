//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `polygon/`: Polygon.io REST market data adapter
//! - `persistence/`: In-memory market and log stores
//! - `random`: Thread-local random source
//! - `container`: Dependency injection container

pub mod container;
pub mod persistence;
pub mod polygon;
pub mod random;
