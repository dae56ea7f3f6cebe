//! Random Source Port (Driven Port)

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// An integer in `low..=high`.
    fn int_inclusive(&self, low: u32, high: u32) -> u32;
}
