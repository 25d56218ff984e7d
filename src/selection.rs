//! Selection strategies.
//!
//! Selection draws couples of parents from the current ranked
//! generation. Both strategies assume **maximization** (higher rank =
//! better) and sample parents independently with replacement, so a
//! couple may pair an individual with itself.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::chromosome::Couple;
use crate::types::{Hypothesis, Rank, Selection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Weight floor so the worst individual keeps a nonzero chance.
const WEIGHT_EPSILON: f64 = 1e-10;

/// Fitness-proportionate (roulette wheel) selection.
///
/// Selection probability is proportional to rank. Ranks are shifted by
/// the generation minimum (`rank - min + epsilon`) so that negative
/// ranks are valid and the worst individual keeps a sliver of wheel.
///
/// **Warning**: susceptible to super-individual dominance when rank
/// variance is high.
///
/// # Complexity
/// O(n) per drawn parent (linear scan of the wheel).
pub struct RouletteWheelSelection {
    rng: StdRng,
}

impl RouletteWheelSelection {
    /// Creates a roulette selector with its own RNG stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn spin(&mut self, weights: &[f64], total: f64) -> usize {
        let n = weights.len();
        if total <= 0.0 {
            return self.rng.random_range(0..n);
        }
        let threshold = self.rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            cumulative += w;
            if cumulative > threshold {
                return i;
            }
        }
        n - 1 // floating-point fallback
    }
}

impl<R: Rank> Selection<R> for RouletteWheelSelection {
    fn select(&mut self, hypotheses: &[Hypothesis<R>], count: usize) -> Vec<Couple> {
        if count == 0 {
            return Vec::new();
        }
        assert!(
            !hypotheses.is_empty(),
            "cannot select from an empty population"
        );

        let ranks: Vec<f64> = hypotheses.iter().map(|h| h.rank.to_f64()).collect();
        let min_rank = ranks.iter().cloned().fold(f64::INFINITY, f64::min);

        // Shift so the lowest rank maps to epsilon, the rest scale up.
        let weights: Vec<f64> = ranks
            .iter()
            .map(|&r| {
                let w = r - min_rank + WEIGHT_EPSILON;
                if w > 0.0 {
                    w
                } else {
                    WEIGHT_EPSILON
                }
            })
            .collect();
        let total: f64 = weights.iter().sum();

        (0..count)
            .map(|_| {
                let first = self.spin(&weights, total);
                let second = self.spin(&weights, total);
                (
                    hypotheses[first].chromosome.clone(),
                    hypotheses[second].chromosome.clone(),
                )
            })
            .collect()
    }
}

/// Tournament selection: each parent is the best of `k` random picks.
///
/// Higher `k` = stronger selection pressure.
/// - k=2: light pressure (good for diversity)
/// - k=3-5: moderate pressure (typical default)
/// - k>5: strong pressure (risk of premature convergence)
///
/// # Complexity
/// O(k) per drawn parent.
pub struct TournamentSelection {
    rng: StdRng,
    k: usize,
}

impl TournamentSelection {
    /// Creates a tournament selector of size `k` (treated as at least 1)
    /// with its own RNG stream.
    pub fn new(seed: u64, k: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            k: k.max(1),
        }
    }

    fn tournament<R: Rank>(&mut self, hypotheses: &[Hypothesis<R>]) -> usize {
        let n = hypotheses.len();
        let mut best = self.rng.random_range(0..n);
        for _ in 1..self.k {
            let idx = self.rng.random_range(0..n);
            if hypotheses[best].rank < hypotheses[idx].rank {
                best = idx;
            }
        }
        best
    }
}

impl<R: Rank> Selection<R> for TournamentSelection {
    fn select(&mut self, hypotheses: &[Hypothesis<R>], count: usize) -> Vec<Couple> {
        if count == 0 {
            return Vec::new();
        }
        assert!(
            !hypotheses.is_empty(),
            "cannot select from an empty population"
        );

        (0..count)
            .map(|_| {
                let first = self.tournament(hypotheses);
                let second = self.tournament(hypotheses);
                (
                    hypotheses[first].chromosome.clone(),
                    hypotheses[second].chromosome.clone(),
                )
            })
            .collect()
    }
}
