//! Heuristic Traveling Salesman solvers over geographic cities.
//!
//! Two independent solvers share one precomputed [`DistanceMatrix`]:
//!
//! - **Genetic search** ([`ga`]): tournament selection, partially mapped
//!   crossover (PMX), swap mutation and elitist `(μ+λ)` survivor selection
//!   over a fixed number of generations.
//! - **Greedy construction** ([`greedy`]): deterministic nearest-neighbor
//!   tour from city 0, as a baseline for comparison.
//!
//! Distances come from an injected oracle; [`distance::haversine_km`] is
//! provided as the default great-circle metric.
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::{City, DistanceMatrix};
//! use u_tsp::ga::{GaConfig, GaRunner};
//! use u_tsp::greedy::GreedyConstructor;
//!
//! let cities = [
//!     City::new(37.57, 126.98),
//!     City::new(35.18, 129.08),
//!     City::new(35.87, 128.60),
//!     City::new(37.46, 126.71),
//!     City::new(35.16, 126.85),
//! ];
//! let matrix = DistanceMatrix::haversine(&cities)?;
//!
//! let greedy = GreedyConstructor::construct(&matrix);
//! let ga = GaRunner::run(
//!     &matrix,
//!     &GaConfig::default()
//!         .with_population_size(30)
//!         .with_max_generations(100)
//!         .with_seed(1),
//! )?;
//!
//! assert_eq!(greedy.tour.len(), 6);
//! assert_eq!(ga.best_tour.len(), 5);
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod greedy;
pub mod random;

pub use distance::{City, DistanceMatrix};
pub use error::{Result, TspError};
