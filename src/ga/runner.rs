//! Generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (selection → PMX → mutation → evaluation → truncation)
//! repeated for a fixed number of generations.

use super::config::GaConfig;
use super::operators::{pmx_crossover, swap_mutation};
use super::selection::tournament;
use super::types::{create_population, evaluate_population, tour_length, Population, Tour};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Upper bound on the history entries reserved before the loop starts.
const HISTORY_RESERVE: usize = 4096;

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The shortest tour found during the entire run (`n` city indices).
    pub best_tour: Tour,

    /// Length of `best_tour`, including the closing edge.
    pub best_distance: f64,

    /// Zero-based generation in which `best_tour` was first found.
    pub best_generation: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best distance so far at the end of each generation.
    pub distance_history: Vec<f64>,
}

/// Mutable state of one run: the population, its index-aligned fitness
/// vector and the best tour seen so far.
#[derive(Debug, Clone)]
pub struct RunState {
    population: Population,
    fitness: Vec<f64>,
    best_tour: Option<Tour>,
    best_distance: f64,
    best_generation: usize,
}

impl RunState {
    /// Creates and evaluates a random initial population.
    pub fn new<R: Rng>(matrix: &DistanceMatrix, config: &GaConfig, rng: &mut R) -> Self {
        let population = create_population(matrix.len(), config.population_size, rng);
        let fitness = evaluate_population(&population, matrix, config.parallel);
        Self {
            population,
            fitness,
            best_tour: None,
            best_distance: f64::INFINITY,
            best_generation: 0,
        }
    }

    /// Runs one generation.
    ///
    /// Breeds `offspring_size` children, appends them, re-evaluates the
    /// grown population and keeps the fittest `population_size` tours.
    /// Returns `true` if the running best tour improved.
    pub fn step<R: Rng>(
        &mut self,
        generation: usize,
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> bool {
        let mut offspring = Vec::with_capacity(config.offspring_size);
        for _ in 0..config.offspring_size {
            let p1 = tournament(&self.fitness, config.tournament_size, rng);
            let p2 = tournament(&self.fitness, config.tournament_size, rng);

            let mut child = pmx_crossover(&self.population[p1], &self.population[p2], rng);
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                swap_mutation(&mut child, rng);
            }
            offspring.push(child);
        }

        self.population.append(&mut offspring);
        self.fitness = evaluate_population(&self.population, matrix, config.parallel);
        self.truncate(config.population_size);

        let length = tour_length(&self.population[0], matrix);
        trace!(generation, best_in_generation = length, "generation complete");

        if length < self.best_distance {
            debug!(
                generation,
                previous = self.best_distance,
                best = length,
                "new best tour"
            );
            self.best_tour = Some(self.population[0].clone());
            self.best_distance = length;
            self.best_generation = generation;
            true
        } else {
            false
        }
    }

    /// Stable sort by fitness (descending), then keep the first `size`.
    fn truncate(&mut self, size: usize) {
        let population = std::mem::take(&mut self.population);
        let fitness = std::mem::take(&mut self.fitness);

        let mut ranked: Vec<(Tour, f64)> = population.into_iter().zip(fitness).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(size);

        let (population, fitness): (Population, Vec<f64>) = ranked.into_iter().unzip();
        self.population = population;
        self.fitness = fitness;
    }

    /// Current population.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// Fitness values, index-aligned with [`population`](Self::population).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Best tour found so far, if any generation has run.
    pub fn best_tour(&self) -> Option<&[usize]> {
        self.best_tour.as_deref()
    }

    /// Length of the best tour so far (`+inf` before the first generation).
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Generation in which the best tour was found.
    pub fn best_generation(&self) -> usize {
        self.best_generation
    }
}

/// Executes the genetic TSP search.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::{City, DistanceMatrix};
/// use u_tsp::ga::{GaConfig, GaRunner};
///
/// let cities = [
///     City::new(48.85, 2.35),
///     City::new(51.51, -0.13),
///     City::new(52.52, 13.40),
///     City::new(41.90, 12.50),
///     City::new(40.42, -3.70),
/// ];
/// let matrix = DistanceMatrix::haversine(&cities).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_offspring_size(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 5);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA for exactly `config.max_generations` generations.
    ///
    /// # Errors
    /// Returns [`TspError::Config`](crate::TspError::Config) if the
    /// configuration is invalid.
    pub fn run(matrix: &DistanceMatrix, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked between generations. When it is set, the run
    /// stops and returns the best tour found so far with `cancelled` set.
    /// At least one generation always runs.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);

        info!(
            cities = matrix.len(),
            population_size = config.population_size,
            offspring_size = config.offspring_size,
            max_generations = config.max_generations,
            seed = ?config.seed,
            "starting genetic search"
        );

        let mut state = RunState::new(matrix, config, &mut rng);
        // Runs may be cancelled long before a large budget is spent.
        let mut distance_history = Vec::with_capacity(config.max_generations.min(HISTORY_RESERVE));
        let mut cancelled = false;

        for gen in 0..config.max_generations {
            if gen > 0 {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break;
                    }
                }
            }

            state.step(gen, matrix, config, &mut rng);
            distance_history.push(state.best_distance);
        }

        let generations = distance_history.len();
        let best_tour = state
            .best_tour
            .take()
            .unwrap_or_else(|| state.population[0].clone());

        info!(
            best_distance = state.best_distance,
            best_generation = state.best_generation,
            generations,
            cancelled,
            "genetic search finished"
        );

        Ok(GaResult {
            best_tour,
            best_distance: state.best_distance,
            best_generation: state.best_generation,
            generations,
            cancelled,
            distance_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
