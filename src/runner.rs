//! Generational solver loop.
//!
//! [`Solver`] orchestrates one optimization run: initialization →
//! selection → crossover → mutation → insertion, round after round,
//! with basic elitism — the best hypothesis ever seen is reinserted
//! into every generation and is what the run finally returns.

use crate::config::SolverConfig;
use crate::population::Population;
use crate::types::{CrossOver, Hypothesis, Initializer, Mutation, Rank, RankFunction, Selection};
use log::{debug, info};

/// Result of a solver run.
#[derive(Debug, Clone)]
pub struct SolveResult<R: Rank> {
    /// The best hypothesis found during the entire run.
    pub best: Hypothesis<R>,

    /// Number of evolution rounds executed.
    pub generations: usize,

    /// Best-ever rank after initialization and after each round
    /// (`num_iterations + 1` entries). Monotonically non-decreasing:
    /// this is the elitism guarantee, made observable.
    pub rank_history: Vec<f64>,
}

/// Executes the generational loop.
///
/// The engine **maximizes**: a hypothesis replaces the running best only
/// when its rank is *strictly* greater, so equal-ranked newcomers never
/// displace an earlier best. Negate the rank function to minimize.
///
/// # Usage
///
/// ```
/// use bitga::{
///     Chromosome, CrossOverOnProb, RandomInitializer, RandomMutate,
///     RandomSplitCrossOver, RouletteWheelSelection, Solver, SolverConfig,
/// };
///
/// let config = SolverConfig::default()
///     .with_population_size(20)
///     .with_num_iterations(50);
/// let mut init = RandomInitializer::new(16, 1, 0.5);
/// let mut select = RouletteWheelSelection::new(2);
/// let mut cross = CrossOverOnProb::new(3, 0.9, RandomSplitCrossOver::new(16, 4));
/// let mut mutate = RandomMutate::new(5, 0.05);
///
/// let result = Solver::run(&config, &mut init, &mut select, &mut cross, &mut mutate, |c: &Chromosome| {
///     c.count_ones() as f64
/// });
/// assert!(result.best.rank >= 10.0);
/// ```
pub struct Solver;

impl Solver {
    /// Runs the optimization and returns the best hypothesis ever seen.
    ///
    /// Each round selects `population_size - 1` couples from the current
    /// generation, pushes one mutated crossover child per couple into
    /// the next generation, swaps the generations, and reinserts a copy
    /// of the running best (re-ranked) to bring the generation back to
    /// exactly `population_size` members.
    ///
    /// The rank function is cloned into both working populations, so it
    /// must be `Clone` (closures qualify when their captures do).
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SolverConfig::validate`] first to get a descriptive error).
    pub fn run<R, I, S, C, M, F>(
        config: &SolverConfig,
        initializer: &mut I,
        selection: &mut S,
        crossover: &mut C,
        mutation: &mut M,
        rank_function: F,
    ) -> SolveResult<R>
    where
        R: Rank,
        I: Initializer,
        S: Selection<R>,
        C: CrossOver,
        M: Mutation,
        F: RankFunction<R> + Clone,
    {
        config.validate().expect("invalid SolverConfig");

        let mut current = Population::new(rank_function.clone());
        let mut next = Population::new(rank_function);

        current.init(initializer, config.population_size);

        let mut best = current
            .top()
            .expect("freshly initialized population is non-empty")
            .clone();

        let mut rank_history = Vec::with_capacity(config.num_iterations + 1);
        rank_history.push(best.rank.to_f64());

        if config.verbosity >= 1 {
            info!(
                "starting run: {} rounds, population {}, initial best rank {}",
                config.num_iterations,
                config.population_size,
                best.rank.to_f64()
            );
        }

        for round in 0..config.num_iterations {
            for (a, b) in current.select(selection, config.population_size - 1) {
                let child = crossover.combine(&a, &b);
                next.push(mutation.mutate(&child));
            }

            std::mem::swap(&mut current, &mut next);
            next.reset();

            if let Some(top) = current.top() {
                if best.rank < top.rank {
                    best = top.clone();
                }
            }

            // Elitism: the best one passes directly into the new generation.
            current.push(best.chromosome.clone());

            rank_history.push(best.rank.to_f64());
            if config.verbosity >= 2 {
                debug!(
                    "round {}/{}: best rank {}",
                    round + 1,
                    config.num_iterations,
                    best.rank.to_f64()
                );
            }
        }

        if config.verbosity >= 1 {
            info!(
                "run finished after {} rounds: best rank {}",
                config.num_iterations,
                best.rank.to_f64()
            );
        }

        SolveResult {
            best,
            generations: config.num_iterations,
            rank_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
