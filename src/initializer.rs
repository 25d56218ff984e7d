//! Chromosome initialization strategies.
//!
//! [`RandomInitializer`] builds generation zero: fixed-length
//! chromosomes with each bit set independently with a configurable
//! probability.

use crate::chromosome::Chromosome;
use crate::types::Initializer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates random chromosomes of a fixed length.
///
/// Each bit is set to one independently with probability `one_prob`.
/// Owns a private RNG stream seeded at construction.
///
/// # Examples
///
/// ```
/// use bitga::{Initializer, RandomInitializer};
///
/// let mut init = RandomInitializer::new(32, 42, 0.5);
/// assert_eq!(init.create().len(), 32);
/// ```
pub struct RandomInitializer {
    len: usize,
    rng: StdRng,
    one_prob: f64,
}

impl RandomInitializer {
    /// Creates an initializer for chromosomes of length `len`, setting
    /// each bit with probability `one_prob` (clamped to `[0, 1]`).
    ///
    /// # Panics
    /// Panics if `len == 0`.
    pub fn new(len: usize, seed: u64, one_prob: f64) -> Self {
        assert!(len > 0, "chromosome length must be positive");
        Self {
            len,
            rng: StdRng::seed_from_u64(seed),
            one_prob: one_prob.clamp(0.0, 1.0),
        }
    }
}

impl Initializer for RandomInitializer {
    fn create(&mut self) -> Chromosome {
        let rng = &mut self.rng;
        let prob = self.one_prob;
        Chromosome::new((0..self.len).map(|_| rng.random_bool(prob)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_requested_length() {
        let mut init = RandomInitializer::new(17, 42, 0.5);
        for _ in 0..10 {
            assert_eq!(init.create().len(), 17);
        }
    }

    #[test]
    fn test_prob_zero_all_zeros() {
        let mut init = RandomInitializer::new(16, 42, 0.0);
        assert_eq!(init.create().count_ones(), 0);
    }

    #[test]
    fn test_prob_one_all_ones() {
        let mut init = RandomInitializer::new(16, 42, 1.0);
        assert_eq!(init.create().count_ones(), 16);
    }

    #[test]
    fn test_bit_density_roughly_matches_probability() {
        // 10_000 bits at p = 0.5: ones within 4 sigma of 5_000.
        let mut init = RandomInitializer::new(100, 42, 0.5);
        let ones: usize = (0..100).map(|_| init.create().count_ones()).sum();
        assert!(
            (ones as i64 - 5_000).abs() < 200,
            "biased initializer: {ones}/10000 ones"
        );
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut first = RandomInitializer::new(24, 7, 0.5);
        let mut second = RandomInitializer::new(24, 7, 0.5);
        for _ in 0..20 {
            assert_eq!(first.create(), second.create());
        }
    }

    #[test]
    #[should_panic(expected = "length must be positive")]
    fn test_zero_length_panics() {
        RandomInitializer::new(0, 42, 0.5);
    }
}
