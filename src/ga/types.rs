//! Tour representation, population construction and fitness evaluation.
//!
//! A [`Tour`] is a permutation of city indices `0..n` with an implicit
//! return to its first city. Fitness is never stored on the tour itself:
//! the runner keeps a fitness vector index-aligned with the population.

use crate::distance::DistanceMatrix;
use crate::random::shuffle;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A candidate tour: a permutation of `0..n`.
pub type Tour = Vec<usize>;

/// An ordered collection of tours.
pub type Population = Vec<Tour>;

/// Creates a uniformly random tour over `n` cities.
pub fn create_individual<R: Rng>(n: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (0..n).collect();
    shuffle(&mut tour, rng);
    tour
}

/// Creates `size` independently shuffled tours over `n` cities.
pub fn create_population<R: Rng>(n: usize, size: usize, rng: &mut R) -> Population {
    (0..size).map(|_| create_individual(n, rng)).collect()
}

/// Total length of the closed tour, including the edge back to the start.
pub fn tour_length(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }
    let open: f64 = tour.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
    open + matrix.get(tour[n - 1], tour[0])
}

/// Fitness of a tour: the inverse of its length. Higher is better.
///
/// A zero-length tour (all cities coincide) has fitness `f64::MAX`.
pub fn fitness(tour: &[usize], matrix: &DistanceMatrix) -> f64 {
    fitness_from_length(tour_length(tour, matrix))
}

fn fitness_from_length(length: f64) -> f64 {
    if length == 0.0 {
        f64::MAX
    } else {
        1.0 / length
    }
}

/// Evaluates every tour, returning fitness values index-aligned with
/// `population`.
///
/// With the `parallel` feature, `parallel = true` spreads evaluation over
/// the rayon pool. Evaluation is pure, so both paths give the same vector.
pub fn evaluate_population(
    population: &[Tour],
    matrix: &DistanceMatrix,
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population.par_iter().map(|t| fitness(t, matrix)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|t| fitness(t, matrix)).collect()
}

/// Checks that `tour` holds each of `0..n` exactly once.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
