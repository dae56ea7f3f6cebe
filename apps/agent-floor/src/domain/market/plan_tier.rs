//! Market data provider plan tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pricing granularity purchased from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    /// Free plan: previous-day closes only.
    #[default]
    EndOfDay,
    /// Paid plan: minute-level aggregates.
    Minute,
    /// Realtime plan.
    ///
    /// Resolves prices through the end-of-day path, same as `EndOfDay`.
    Realtime,
}

impl PlanTier {
    /// Parse the `POLYGON_PLAN` setting. Unknown values map to `EndOfDay`.
    #[must_use]
    pub fn from_plan(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("paid") => Self::Minute,
            Some("realtime") => Self::Realtime,
            _ => Self::EndOfDay,
        }
    }

    /// Whether price lookups use the intraday snapshot endpoint.
    #[must_use]
    pub const fn uses_minute_data(&self) -> bool {
        matches!(self, Self::Minute)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfDay => write!(f, "END_OF_DAY"),
            Self::Minute => write!(f, "MINUTE"),
            Self::Realtime => write!(f, "REALTIME"),
        }
    }
}
