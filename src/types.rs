//! Core trait definitions for the engine.
//!
//! The engine is assembled from five independently substitutable
//! collaborator contracts — [`Initializer`], [`Selection`], [`CrossOver`],
//! [`Mutation`] and [`RankFunction`] — plus the [`Rank`] marker trait for
//! the fitness scalar. Each contract can be implemented by a struct
//! (typically one carrying its own seeded RNG) or, for the stateless
//! ones, by a plain closure.

use crate::chromosome::{Chromosome, Couple};

/// Marker trait for rank (fitness) values.
///
/// Ranks must support comparison and be cheaply copyable.
/// **Higher rank is considered better** (maximization); negate the rank
/// function for minimization problems.
///
/// Built-in implementations exist for `f64` and `f32`. Comparison uses
/// `<`, so pick a rank type whose values have a well-defined order
/// (floating point without NaN).
pub trait Rank: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the rank to `f64` for logging and history tracking.
    fn to_f64(self) -> f64;
}

impl Rank for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Rank for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A chromosome paired with the rank it was assigned at insertion time.
///
/// Hypotheses are never re-ranked lazily: the rank is computed once by
/// [`Population::push`](crate::Population::push) and stored alongside
/// the chromosome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypothesis<R: Rank> {
    /// The candidate solution.
    pub chromosome: Chromosome,
    /// Its fitness, as computed by the population's rank function.
    pub rank: R,
}

/// Creates chromosomes for generation zero.
///
/// Invoked exactly `population_size` times to build the initial
/// population. Any `FnMut() -> Chromosome` closure qualifies.
pub trait Initializer {
    /// Produces one new chromosome.
    fn create(&mut self) -> Chromosome;
}

impl<F> Initializer for F
where
    F: FnMut() -> Chromosome,
{
    fn create(&mut self) -> Chromosome {
        self()
    }
}

/// Maps a chromosome to its scalar rank.
///
/// The engine treats this as pure: ranking the same chromosome twice
/// must yield the same value, or the stored ranks lose their meaning.
/// Any `Fn(&Chromosome) -> R` closure qualifies.
pub trait RankFunction<R: Rank> {
    /// Computes the rank of `chromosome`. Higher is better.
    fn rank(&self, chromosome: &Chromosome) -> R;
}

impl<R, F> RankFunction<R> for F
where
    R: Rank,
    F: Fn(&Chromosome) -> R,
{
    fn rank(&self, chromosome: &Chromosome) -> R {
        self(chromosome)
    }
}

/// Chooses couples of parents from a ranked population.
///
/// Implementations must return *exactly* `count` couples. The order of
/// the returned sequence determines the order in which children are
/// produced — irrelevant to correctness, but part of reproducibility
/// given fixed RNG seeds.
pub trait Selection<R: Rank> {
    /// Selects `count` couples from `hypotheses`.
    ///
    /// # Panics
    /// Panics if `hypotheses` is empty and `count > 0`.
    fn select(&mut self, hypotheses: &[Hypothesis<R>], count: usize) -> Vec<Couple>;
}

/// Combines two parent chromosomes into one child.
///
/// The contract shared by all crossover operators:
///
/// - both parents have the same length and the child preserves it
///   (a length mismatch fails fast — never truncated or padded);
/// - parents are read-only, the child is a fresh chromosome;
/// - the result is deterministic given the operator's private RNG state
///   at call time.
///
/// Operators carry their own seeded RNG stream and mutate it on every
/// call, so they are stateful and **not** safe for concurrent use:
/// create one instance per execution context.
pub trait CrossOver {
    /// Produces a child from parents `a` and `b`.
    ///
    /// # Panics
    /// Panics if `a.len() != b.len()`.
    fn combine(&mut self, a: &Chromosome, b: &Chromosome) -> Chromosome;
}

/// Perturbs a single chromosome.
///
/// Must preserve the chromosome length; may return the input unchanged.
/// Any `FnMut(&Chromosome) -> Chromosome` closure qualifies.
pub trait Mutation {
    /// Returns a (possibly altered) copy of `chromosome`.
    fn mutate(&mut self, chromosome: &Chromosome) -> Chromosome;
}

impl<F> Mutation for F
where
    F: FnMut(&Chromosome) -> Chromosome,
{
    fn mutate(&mut self, chromosome: &Chromosome) -> Chromosome {
        self(chromosome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_to_f64() {
        assert_eq!(1.5f64.to_f64(), 1.5);
        assert_eq!(2.5f32.to_f64(), 2.5);
    }

    #[test]
    fn test_closure_initializer() {
        let mut init = || Chromosome::new(vec![true, true]);
        let c = Initializer::create(&mut init);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_closure_rank_function() {
        let rank_fn = |c: &Chromosome| c.count_ones() as f64;
        let c = Chromosome::new(vec![true, false, true]);
        assert_eq!(rank_fn.rank(&c), 2.0);
    }

    #[test]
    fn test_closure_mutation() {
        let mut flip_all = |c: &Chromosome| Chromosome::new(c.iter().map(|b| !b).collect());
        let c = Chromosome::new(vec![true, false]);
        let m = Mutation::mutate(&mut flip_all, &c);
        assert_eq!(m, Chromosome::new(vec![false, true]));
    }
}
