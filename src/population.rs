//! Ranked generation storage.
//!
//! [`Population`] owns one generation of [`Hypothesis`] values together
//! with the rank function that scores them. Every chromosome is ranked
//! exactly once, at insertion, and the top hypothesis is maintained
//! incrementally so it is consistent before and after every push — the
//! solver's elitism step depends on that.

use crate::chromosome::{Chromosome, Couple};
use crate::types::{Hypothesis, Initializer, Rank, RankFunction, Selection};

/// One generation of ranked hypotheses.
///
/// The solver keeps two populations (current and next generation) and
/// swaps their roles each round; [`reset`](Population::reset) clears the
/// storage while retaining the rank function for reuse.
///
/// # Examples
///
/// ```
/// use bitga::{Chromosome, Population};
///
/// let mut pop = Population::new(|c: &Chromosome| c.count_ones() as f64);
/// pop.push(Chromosome::new(vec![true, false]));
/// pop.push(Chromosome::new(vec![true, true]));
/// assert_eq!(pop.top().unwrap().rank, 2.0);
/// ```
pub struct Population<R: Rank, F: RankFunction<R>> {
    rank_fn: F,
    hypotheses: Vec<Hypothesis<R>>,
    top: Option<usize>,
}

impl<R: Rank, F: RankFunction<R>> Population<R, F> {
    /// Creates an empty population scored by `rank_fn`.
    pub fn new(rank_fn: F) -> Self {
        Self {
            rank_fn,
            hypotheses: Vec::new(),
            top: None,
        }
    }

    /// Rebuilds the population with `size` chromosomes drawn from
    /// `initializer`, replacing any previous contents.
    pub fn init<I: Initializer>(&mut self, initializer: &mut I, size: usize) {
        self.reset();
        self.hypotheses.reserve(size);
        for _ in 0..size {
            self.push(initializer.create());
        }
    }

    /// Ranks `chromosome` and stores it.
    ///
    /// The top hypothesis is updated only when the newcomer is *strictly*
    /// better, so on ties the earliest-inserted hypothesis stays on top.
    pub fn push(&mut self, chromosome: Chromosome) {
        let rank = self.rank_fn.rank(&chromosome);
        let index = self.hypotheses.len();
        let displaced = match self.top {
            Some(best) => self.hypotheses[best].rank < rank,
            None => true,
        };
        self.hypotheses.push(Hypothesis { chromosome, rank });
        if displaced {
            self.top = Some(index);
        }
    }

    /// The best-ranked hypothesis of this generation, if any.
    pub fn top(&self) -> Option<&Hypothesis<R>> {
        self.top.map(|i| &self.hypotheses[i])
    }

    /// Draws `count` couples for reproduction via `selection`.
    pub fn select<S: Selection<R>>(&self, selection: &mut S, count: usize) -> Vec<Couple> {
        selection.select(&self.hypotheses, count)
    }

    /// Clears the stored hypotheses, retaining the rank function.
    pub fn reset(&mut self) {
        self.hypotheses.clear();
        self.top = None;
    }

    /// Number of hypotheses currently stored.
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    /// Returns `true` if the population holds no hypotheses.
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }

    /// The stored hypotheses, in insertion order.
    pub fn hypotheses(&self) -> &[Hypothesis<R>] {
        &self.hypotheses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initializer::RandomInitializer;
    use crate::selection::TournamentSelection;

    fn ones_rank(c: &Chromosome) -> f64 {
        c.count_ones() as f64
    }

    #[test]
    fn test_init_builds_requested_size() {
        let mut pop = Population::new(ones_rank);
        let mut init = RandomInitializer::new(8, 42, 0.5);
        pop.init(&mut init, 25);
        assert_eq!(pop.len(), 25);
        assert!(pop.top().is_some());
    }

    #[test]
    fn test_init_replaces_previous_contents() {
        let mut pop = Population::new(ones_rank);
        let mut init = RandomInitializer::new(8, 42, 0.5);
        pop.init(&mut init, 10);
        pop.init(&mut init, 4);
        assert_eq!(pop.len(), 4);
    }

    #[test]
    fn test_push_ranks_at_insertion() {
        let mut pop = Population::new(ones_rank);
        pop.push(Chromosome::new(vec![true, true, false]));
        assert_eq!(pop.hypotheses()[0].rank, 2.0);
    }

    #[test]
    fn test_top_tracks_best() {
        let mut pop = Population::new(ones_rank);
        pop.push(Chromosome::new(vec![true, false, false]));
        assert_eq!(pop.top().unwrap().rank, 1.0);
        pop.push(Chromosome::new(vec![true, true, true]));
        assert_eq!(pop.top().unwrap().rank, 3.0);
        pop.push(Chromosome::new(vec![false, false, false]));
        assert_eq!(pop.top().unwrap().rank, 3.0);
    }

    #[test]
    fn test_top_keeps_earliest_on_tie() {
        let mut pop = Population::new(ones_rank);
        let first = Chromosome::new(vec![true, false]);
        let second = Chromosome::new(vec![false, true]);
        pop.push(first.clone());
        pop.push(second);
        assert_eq!(pop.top().unwrap().chromosome, first);
    }

    #[test]
    fn test_empty_population_has_no_top() {
        let pop: Population<f64, _> = Population::new(ones_rank);
        assert!(pop.top().is_none());
        assert!(pop.is_empty());
    }

    #[test]
    fn test_reset_clears_but_stays_usable() {
        let mut pop = Population::new(ones_rank);
        pop.push(Chromosome::new(vec![true]));
        pop.reset();
        assert!(pop.is_empty());
        assert!(pop.top().is_none());
        pop.push(Chromosome::new(vec![false]));
        assert_eq!(pop.len(), 1);
        assert_eq!(pop.top().unwrap().rank, 0.0);
    }

    #[test]
    fn test_select_delegates_to_strategy() {
        let mut pop = Population::new(ones_rank);
        let mut init = RandomInitializer::new(8, 42, 0.5);
        pop.init(&mut init, 10);

        let mut sel = TournamentSelection::new(42, 3);
        let couples = pop.select(&mut sel, 9);
        assert_eq!(couples.len(), 9);
        for (a, b) in &couples {
            assert_eq!(a.len(), 8);
            assert_eq!(b.len(), 8);
        }
    }
}
