//! Mutation operators.
//!
//! [`RandomMutate`] flips each gene independently with a fixed
//! probability; [`NoMutation`] is the identity, useful when the caller
//! wants crossover-only evolution or a deterministic reproduction path.

use crate::chromosome::Chromosome;
use crate::types::Mutation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Flips each bit independently with probability `flip_prob`.
///
/// Owns a private RNG stream seeded at construction; not safe for
/// concurrent invocation — create one instance per thread.
///
/// # Examples
///
/// ```
/// use bitga::{Chromosome, Mutation, RandomMutate};
///
/// let mut mutate = RandomMutate::new(42, 0.1);
/// let c = Chromosome::new(vec![false; 8]);
/// let m = mutate.mutate(&c);
/// assert_eq!(m.len(), 8);
/// ```
pub struct RandomMutate {
    rng: StdRng,
    flip_prob: f64,
}

impl RandomMutate {
    /// Creates a mutation operator with per-bit flip probability
    /// `flip_prob` (clamped to `[0, 1]`).
    pub fn new(seed: u64, flip_prob: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            flip_prob: flip_prob.clamp(0.0, 1.0),
        }
    }
}

impl Mutation for RandomMutate {
    fn mutate(&mut self, chromosome: &Chromosome) -> Chromosome {
        let rng = &mut self.rng;
        let prob = self.flip_prob;
        let bits = chromosome
            .iter()
            .map(|bit| {
                if rng.random_bool(prob) {
                    !bit
                } else {
                    bit
                }
            })
            .collect();
        Chromosome::new(bits)
    }
}

/// The identity mutation: returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMutation;

impl Mutation for NoMutation {
    fn mutate(&mut self, chromosome: &Chromosome) -> Chromosome {
        chromosome.clone()
    }
}
