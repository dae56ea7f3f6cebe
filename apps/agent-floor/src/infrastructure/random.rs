//! Thread-local random source.

use rand::Rng;

use crate::application::ports::RandomSource;

/// `RandomSource` backed by `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_inclusive(&self, low: u32, high: u32) -> u32 {
        rand::rng().random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let source = ThreadRandom;
        for _ in 0..1000 {
            let n = source.int_inclusive(1, 100);
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn degenerate_range() {
        assert_eq!(ThreadRandom.int_inclusive(7, 7), 7);
    }
}
