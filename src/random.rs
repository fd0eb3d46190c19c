//! Random number utilities.
//!
//! Every stochastic operator in this crate takes an explicit `&mut R: Rng`.
//! Runs are seeded through [`create_rng`], so the same seed always
//! replays the same search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from the given seed, or from OS entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// In-place Fisher–Yates shuffle.
///
/// Every one of the `n!` orderings is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
