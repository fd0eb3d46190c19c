//! Nearest-neighbor tour construction.
//!
//! A deterministic baseline: start at a city, repeatedly move to the
//! closest unvisited city, then return to the start.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use tracing::debug;

/// Result of a greedy construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// Visiting order, `n + 1` entries: ends with the start city again.
    pub tour: Vec<usize>,

    /// Sum of the distances along `tour`, closing edge included.
    pub total_cost: f64,

    /// Number of moves made, one per appended city (`n` in total).
    pub steps: usize,
}

/// Builds nearest-neighbor tours.
pub struct GreedyConstructor;

impl GreedyConstructor {
    /// Builds the nearest-neighbor tour starting from city 0.
    pub fn construct(matrix: &DistanceMatrix) -> GreedyResult {
        Self::build(matrix, 0)
    }

    /// Builds the nearest-neighbor tour starting from `start`.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidStart`] if `start` is not a city index.
    pub fn from_start(matrix: &DistanceMatrix, start: usize) -> Result<GreedyResult> {
        if start >= matrix.len() {
            return Err(TspError::InvalidStart {
                start,
                len: matrix.len(),
            });
        }
        Ok(Self::build(matrix, start))
    }

    fn build(matrix: &DistanceMatrix, start: usize) -> GreedyResult {
        let n = matrix.len();
        let mut tour = Vec::with_capacity(n + 1);
        let mut visited = vec![false; n];
        let mut total_cost = 0.0;
        let mut steps = 0;

        tour.push(start);
        visited[start] = true;
        let mut current = start;

        while let Some((next, d)) = nearest_unvisited(matrix.row(current), &visited) {
            tour.push(next);
            visited[next] = true;
            total_cost += d;
            steps += 1;
            current = next;
        }

        tour.push(start);
        total_cost += matrix.get(current, start);
        steps += 1;

        debug!(start, total_cost, steps, "greedy tour constructed");

        GreedyResult {
            tour,
            total_cost,
            steps,
        }
    }
}

/// Closest unvisited city in ascending scan order; ties keep the lowest index.
fn nearest_unvisited(row: &[f64], visited: &[bool]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &d) in row.iter().enumerate() {
        if visited[j] {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((j, d)),
        }
    }
    best
}
