//! Crossover operators.
//!
//! Three composable operators implement the [`CrossOver`] contract:
//!
//! - [`RandomSplitCrossOver`]: single-point recombination at a random
//!   split position, with a coin flip deciding which parent supplies the
//!   prefix (removes positional bias toward the first argument).
//! - [`RandomMixCrossOver`]: uniform recombination — every gene is
//!   inherited from a randomly chosen parent, independently per position.
//! - [`CrossOverOnProb`]: wraps any other operator with a crossover
//!   probability; when the gate does not fire, the "child" is a verbatim
//!   copy of one parent.
//!
//! Each operator owns a private RNG stream seeded at construction and is
//! **not** safe for concurrent invocation — create a distinct instance
//! per thread.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use crate::chromosome::Chromosome;
use crate::types::CrossOver;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Single-point crossover at a uniformly random split position.
///
/// Per call the operator draws a split position `pos` in `[0, len)` and
/// a fair coin. On one outcome the child takes `[0, pos)` from the first
/// parent and `[pos, len)` from the second; on the other the assignment
/// is mirrored. Contiguous building blocks from either parent survive
/// intact on both sides of the cut.
///
/// # Examples
///
/// ```
/// use bitga::{Chromosome, CrossOver, RandomSplitCrossOver};
///
/// let mut cross = RandomSplitCrossOver::new(4, 42);
/// let a = Chromosome::new(vec![true; 4]);
/// let b = Chromosome::new(vec![false; 4]);
/// let child = cross.combine(&a, &b);
/// assert_eq!(child.len(), 4);
/// ```
pub struct RandomSplitCrossOver {
    len: usize,
    rng: StdRng,
}

impl RandomSplitCrossOver {
    /// Creates an operator for chromosomes of length `len`, with its own
    /// RNG stream seeded by `seed`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    pub fn new(len: usize, seed: u64) -> Self {
        assert!(len > 0, "chromosome length must be positive");
        Self {
            len,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CrossOver for RandomSplitCrossOver {
    fn combine(&mut self, a: &Chromosome, b: &Chromosome) -> Chromosome {
        assert_eq!(a.len(), b.len(), "parents must have equal length");
        assert_eq!(
            a.len(),
            self.len,
            "parent length does not match operator length"
        );

        let pos = self.rng.random_range(0..self.len);
        let (prefix, suffix) = if self.rng.random_bool(0.5) {
            (a, b)
        } else {
            (b, a)
        };

        let mut bits = Vec::with_capacity(self.len);
        bits.extend(prefix.bits()[..pos].iter().copied());
        bits.extend(suffix.bits()[pos..].iter().copied());
        Chromosome::new(bits)
    }
}

/// Uniform crossover: each gene is a fair-coin pick between parents.
///
/// Maximal mixing with no positional bias — use when no locus adjacency
/// structure matters.
pub struct RandomMixCrossOver {
    rng: StdRng,
}

impl RandomMixCrossOver {
    /// Creates an operator with its own RNG stream seeded by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CrossOver for RandomMixCrossOver {
    fn combine(&mut self, a: &Chromosome, b: &Chromosome) -> Chromosome {
        assert_eq!(a.len(), b.len(), "parents must have equal length");

        let rng = &mut self.rng;
        let bits = a
            .iter()
            .zip(b.iter())
            .map(|(bit_a, bit_b)| if rng.random_bool(0.5) { bit_a } else { bit_b })
            .collect();
        Chromosome::new(bits)
    }
}

/// Applies a wrapped crossover operator with probability `prob`.
///
/// Per call a uniform real in `[0, 1)` is drawn; below `prob` the call
/// delegates to the inner operator, otherwise a fair coin returns a
/// verbatim copy of one of the two parents — no recombination occurs.
/// This decouples the recombination *rate* from the mixing *strategy*.
///
/// Any [`CrossOver`] can be wrapped, including another `CrossOverOnProb`.
///
/// # Examples
///
/// ```
/// use bitga::{CrossOverOnProb, RandomMixCrossOver};
///
/// let cross = CrossOverOnProb::new(7, 0.9, RandomMixCrossOver::new(11));
/// ```
pub struct CrossOverOnProb<C: CrossOver> {
    rng: StdRng,
    prob: f64,
    inner: C,
}

impl<C: CrossOver> CrossOverOnProb<C> {
    /// Wraps `inner` with crossover probability `prob` (clamped to
    /// `[0, 1]`), using an RNG stream seeded by `seed`.
    pub fn new(seed: u64, prob: f64, inner: C) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            prob: prob.clamp(0.0, 1.0),
            inner,
        }
    }
}

impl<C: CrossOver> CrossOver for CrossOverOnProb<C> {
    fn combine(&mut self, a: &Chromosome, b: &Chromosome) -> Chromosome {
        assert_eq!(a.len(), b.len(), "parents must have equal length");

        if self.rng.random_range(0.0..1.0) < self.prob {
            self.inner.combine(a, b)
        } else if self.rng.random_bool(0.5) {
            a.clone()
        } else {
            b.clone()
        }
    }
}
