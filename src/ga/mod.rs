//! Genetic search for the TSP.
//!
//! Tours are permutations of city indices. Each generation breeds a fixed
//! number of children by tournament selection, PMX crossover and swap
//! mutation, appends them to the population, and keeps the fittest
//! `population_size` tours of parents and children combined.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, offspring, tournament, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`RunState`]: Population and best-so-far, steppable one generation at a time
//! - [`GaResult`]: Best tour, its length and the generation it was found in
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover and swap mutation
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, RunState};
pub use selection::tournament;
pub use types::{
    create_individual, create_population, evaluate_population, fitness, is_valid_tour,
    tour_length, Population, Tour,
};
