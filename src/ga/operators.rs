//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985), preserves absolute
//!   positions from both parents
//!
//! # Mutation
//!
//! - [`swap_mutation`]: exchange two distinct random positions, O(1)
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use super::types::{is_valid_tour, Tour};
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX), producing a single child.
///
/// Two distinct cut points `start < end` are drawn uniformly from `0..n`
/// and the half-open segment `[start, end)` of `parent1` is kept in place.
/// See [`pmx_with_segment`] for the construction itself.
///
/// Parents with fewer than two cities yield a copy of `parent1`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn pmx_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = random_cut_points(n, rng);
    pmx_with_segment(parent1, parent2, start, end)
}

/// Builds the PMX child for a fixed segment `[start, end)`.
///
/// 1. Copy `parent1[start..end]` into the child
/// 2. For each `parent2[i]` in the segment that is not yet in the child,
///    follow the mapping chain `parent1[pos] -> position in parent2`
///    until it leaves the segment, and place the value there
/// 3. Fill the remaining cells from `parent2`
///
/// With `start == end` the segment is empty and the child is a copy of
/// `parent2`.
///
/// # Panics
/// Panics if the parents have different lengths or `start > end` or
/// `end > n`.
pub fn pmx_with_segment(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "segment [{start}, {end}) out of range");

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];

    // where each value sits in parent2
    let mut pos_in_p2 = vec![0usize; n];
    for (pos, &v) in parent2.iter().enumerate() {
        pos_in_p2[v] = pos;
    }

    for i in start..end {
        child[i] = Some(parent1[i]);
        placed[parent1[i]] = true;
    }

    for i in start..end {
        let value = parent2[i];
        if placed[value] {
            continue;
        }
        let mut pos = i;
        loop {
            pos = pos_in_p2[parent1[pos]];
            if pos < start || pos >= end {
                debug_assert!(child[pos].is_none(), "PMX chain landed on an assigned cell");
                child[pos] = Some(value);
                placed[value] = true;
                break;
            }
        }
    }

    let child: Tour = child
        .into_iter()
        .zip(parent2)
        .map(|(cell, &fallback)| cell.unwrap_or(fallback))
        .collect();

    debug_assert!(is_valid_tour(&child, n), "PMX produced a non-permutation: {child:?}");
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions in place.
///
/// Tours with fewer than two cities are left unchanged.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    tour.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct cut points `start < end` within `0..n` (requires `n >= 2`).
fn random_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let cuts = index::sample(rng, n, 2);
    let (a, b) = (cuts.index(0), cuts.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
