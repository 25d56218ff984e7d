//! Generic genetic-algorithm engine over fixed-length bit-string
//! genotypes.
//!
//! A population of candidate solutions evolves across generations under
//! stochastic operators — selection, crossover, mutation — guided by a
//! rank (fitness) function, with basic elitism: the best hypothesis ever
//! seen survives into every generation and is what a run returns.
//! The engine **maximizes** by convention; negate the rank function to
//! minimize.
//!
//! # Core Types
//!
//! - [`Chromosome`]: a fixed-length bit string, the solution encoding
//! - [`Hypothesis`]: a chromosome paired with its computed rank
//! - [`Population`]: one ranked generation with a consistent top
//! - [`SolverConfig`] / [`Solver`]: loop parameters and execution
//!
//! # Collaborator Contracts
//!
//! Five independently substitutable strategy traits assemble an engine:
//! [`Initializer`], [`Selection`], [`CrossOver`], [`Mutation`] and
//! [`RankFunction`]. Ready-made implementations are provided for each
//! ([`RandomInitializer`], [`RouletteWheelSelection`] /
//! [`TournamentSelection`], the crossover family below,
//! [`RandomMutate`]); `Initializer`, `Mutation` and `RankFunction` are
//! also implemented for plain closures.
//!
//! # Crossover Family
//!
//! - [`RandomSplitCrossOver`]: single-point recombination at a random cut
//! - [`RandomMixCrossOver`]: uniform per-gene mixing
//! - [`CrossOverOnProb`]: probability gate around any other operator
//!
//! Operators carry a private RNG stream seeded at construction. They are
//! deliberately stateful and not reentrant; create one instance per
//! thread when parallelizing, and keep the round boundary as a barrier.
//!
//! # Example
//!
//! ```
//! use bitga::{
//!     Chromosome, CrossOverOnProb, RandomInitializer, RandomMutate,
//!     RandomSplitCrossOver, Solver, SolverConfig, TournamentSelection,
//! };
//!
//! const N: usize = 32;
//!
//! let config = SolverConfig::default()
//!     .with_population_size(50)
//!     .with_num_iterations(100);
//!
//! let mut init = RandomInitializer::new(N, 12564, 0.5);
//! let mut select = TournamentSelection::new(4297, 3);
//! let mut cross = CrossOverOnProb::new(771, 0.9, RandomSplitCrossOver::new(N, 3026));
//! let mut mutate = RandomMutate::new(8143, 0.02);
//!
//! // OneMax: the rank is the number of one bits.
//! let result = Solver::run(&config, &mut init, &mut select, &mut cross, &mut mutate, |c: &Chromosome| {
//!     c.count_ones() as f64
//! });
//! assert!(result.best.rank >= 24.0);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod chromosome;
mod config;
mod crossover;
mod decoder;
mod initializer;
mod mutation;
mod population;
mod runner;
mod selection;
mod types;

pub use chromosome::{Chromosome, Couple};
pub use config::SolverConfig;
pub use crossover::{CrossOverOnProb, RandomMixCrossOver, RandomSplitCrossOver};
pub use decoder::Decoder;
pub use initializer::RandomInitializer;
pub use mutation::{NoMutation, RandomMutate};
pub use population::Population;
pub use runner::{SolveResult, Solver};
pub use selection::{RouletteWheelSelection, TournamentSelection};
pub use types::{CrossOver, Hypothesis, Initializer, Mutation, Rank, RankFunction, Selection};
