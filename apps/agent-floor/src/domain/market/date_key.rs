//! Calendar date key for daily market snapshots.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A UTC calendar date, rendered as `YYYY-MM-DD`.
///
/// Used as the key for persisted and cached market snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Create a key from a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current UTC date.
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// The UTC date of a Unix timestamp in milliseconds.
    ///
    /// Returns `None` if the timestamp is out of range.
    #[must_use]
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| Self(dt.date_naive()))
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map(Self)
    }

    /// The underlying date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_iso_date() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(key.to_string(), "2025-03-07");
    }

    #[test]
    fn parse_round_trips_display() {
        let key = DateKey::parse("2024-12-31").unwrap();
        assert_eq!(key.to_string(), "2024-12-31");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(DateKey::parse("31/12/2024").is_err());
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        // 2024-06-14T23:30:00-04:00 is already the 15th in UTC.
        let key = DateKey::from_timestamp_millis(1_718_422_200_000).unwrap();
        assert_eq!(key.to_string(), "2024-06-15");
    }
}
