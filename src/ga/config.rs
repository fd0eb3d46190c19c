//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::{Result, TspError};

/// Configuration for the genetic TSP solver.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 150);
/// assert_eq!(config.max_generations, 2000);
/// assert_eq!(config.offspring_size, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of tours kept between generations.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Number of children produced per generation.
    pub offspring_size: usize,

    /// Number of distinct individuals sampled per tournament.
    pub tournament_size: usize,

    /// Probability of applying swap mutation to a child (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate fitness in parallel (requires the `parallel`
    /// feature; ignored otherwise).
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            max_generations: 2000,
            offspring_size: 50,
            tournament_size: 3,
            mutation_rate: 0.2,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of children per generation.
    pub fn with_offspring_size(mut self, n: usize) -> Self {
        self.offspring_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Unlike the size setters this does not clamp: an out-of-range rate
    /// is reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::Config("population_size must be at least 1".into()));
        }
        if self.max_generations == 0 {
            return Err(TspError::Config("max_generations must be at least 1".into()));
        }
        if self.offspring_size == 0 {
            return Err(TspError::Config("offspring_size must be at least 1".into()));
        }
        if self.tournament_size == 0 {
            return Err(TspError::Config("tournament_size must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
