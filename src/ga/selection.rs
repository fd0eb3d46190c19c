//! Tournament selection.
//!
//! Selection works on the fitness vector alone and returns an index into
//! the population it is aligned with, so parents are never matched back
//! to their fitness by identity.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Samples `min(k, fitness.len())` distinct indices uniformly and returns
/// the one with the highest fitness. On ties the index drawn first wins.
/// A `k` of zero is treated as 1.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let n = fitness.len();
    let k = k.clamp(1, n);

    let mut sample = index::sample(rng, n, k).into_iter();
    let mut best_idx = sample.next().expect("sample holds at least one index");
    for idx in sample {
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::SeedableRng;

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [0.1, 0.2, 1.0, 0.125];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&fitness, 3, &mut rng)] += 1;
        }
        // Index 2 wins whenever it is drawn: 3 of 4 indices are sampled.
        let best_count = counts[2];
        assert!(
            best_count > 7000,
            "expected best to be selected ~75% of the time, got {best_count}/{n}"
        );
        // The worst individual can never win a 3-way tournament out of 4.
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        let fitness = [0.3, 0.9, 0.1, 0.5, 0.2];
        let mut rng = create_rng(1);
        for _ in 0..200 {
            assert_eq!(tournament(&fitness, 5, &mut rng), 1);
            // k larger than the population is capped.
            assert_eq!(tournament(&fitness, 50, &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let fitness = [0.1, 0.2, 1.0, 0.125];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&fitness, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_winner_is_best_of_its_sample() {
        // Replay the same RNG stream to recover the sampled subset.
        let fitness = [0.4, 0.7, 0.7, 0.1, 0.9, 0.2, 0.7];
        for seed in 0..200 {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let mut replay = rand::rngs::StdRng::seed_from_u64(seed);

            let winner = tournament(&fitness, 3, &mut rng);
            let sample: Vec<usize> = index::sample(&mut replay, fitness.len(), 3).into_vec();

            assert!(sample.contains(&winner));
            assert!(sample.iter().all(|&i| fitness[winner] >= fitness[i]));
            // Ties go to the first sampled index.
            let first_best = sample
                .iter()
                .copied()
                .find(|&i| fitness[i] == fitness[winner])
                .unwrap();
            assert_eq!(winner, first_best);
        }
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(tournament(&[0.5], 3, &mut rng), 0);
    }

    #[test]
    fn test_zero_k_treated_as_one() {
        let mut rng = create_rng(42);
        let idx = tournament(&[0.5, 0.6], 0, &mut rng);
        assert!(idx < 2);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        tournament(&[], 3, &mut rng);
    }
}
