//! Market data domain types.

mod date_key;
mod plan_tier;
mod snapshot;

pub use date_key::DateKey;
pub use plan_tier::PlanTier;
pub use snapshot::MarketSnapshot;
