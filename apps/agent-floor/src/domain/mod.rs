//! Domain Layer
//!
//! Pure types with no I/O:
//!
//! - `market`: daily market snapshots, date keys, provider plan tiers
//! - `trace`: trace identifiers, traces, spans and the log events derived from them

pub mod market;
pub mod trace;
