//! Solver configuration.
//!
//! [`SolverConfig`] holds the parameters that control the generational
//! loop.

/// Configuration for the generational solver.
///
/// # Defaults
///
/// ```
/// use bitga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.num_iterations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use bitga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(200)
///     .with_num_iterations(1000)
///     .with_verbosity(1);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of evolution rounds to run.
    ///
    /// Zero is valid: the solver then returns the best hypothesis of the
    /// initial population unchanged.
    pub num_iterations: usize,

    /// Number of hypotheses per generation.
    ///
    /// Must be at least 1. A size of 1 degenerates to elitism only —
    /// no couples are selected and the best hypothesis is simply carried
    /// from round to round.
    pub population_size: usize,

    /// Progress-reporting level.
    ///
    /// 0 is silent; 1 logs run boundaries; 2 additionally logs the
    /// best-ever rank after every round. Output goes through the `log`
    /// facade.
    pub verbosity: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            num_iterations: 500,
            population_size: 100,
            verbosity: 0,
        }
    }
}

impl SolverConfig {
    /// Sets the number of evolution rounds.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the progress-reporting level.
    pub fn with_verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        Ok(())
    }
}
