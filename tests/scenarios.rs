//! End-to-end scenarios for both solvers.

use u_tsp::distance::{City, DistanceMatrix};
use u_tsp::ga::{fitness, is_valid_tour, tour_length, GaConfig, GaRunner};
use u_tsp::greedy::GreedyConstructor;
use u_tsp::TspError;

fn all_permutations(n: usize) -> Vec<Vec<usize>> {
    fn permute(prefix: &mut Vec<usize>, rest: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if rest.is_empty() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..rest.len() {
            let v = rest.remove(i);
            prefix.push(v);
            permute(prefix, rest, out);
            prefix.pop();
            rest.insert(i, v);
        }
    }
    let mut out = Vec::new();
    permute(&mut Vec::new(), &mut (0..n).collect(), &mut out);
    out
}

fn five_cities() -> Vec<City> {
    vec![
        City::new(52.37, 4.90),
        City::new(50.85, 4.35),
        City::new(48.86, 2.35),
        City::new(50.94, 6.96),
        City::new(51.92, 4.48),
    ]
}

#[test]
fn scenario_a_quadrilateral_greedy() {
    // 3×4 rectangle, planar oracle: sides 3 and 4, diagonals 5.
    let cities = [
        City::new(0.0, 0.0),
        City::new(0.0, 4.0),
        City::new(3.0, 4.0),
        City::new(3.0, 0.0),
    ];
    let planar = |a: &City, b: &City| ((a.lat - b.lat).powi(2) + (a.lon - b.lon).powi(2)).sqrt();
    let m = DistanceMatrix::from_cities(&cities, planar).unwrap();

    let result = GreedyConstructor::construct(&m);

    // 0 -> 3 (3), 3 -> 2 (4, beats 1 at 5), 2 -> 1 (3), 1 -> 0 (4).
    assert_eq!(result.tour, vec![0, 3, 2, 1, 0]);
    assert!((result.total_cost - 14.0).abs() < 1e-12);
    assert_eq!(result.steps, 4);
}

#[test]
fn scenario_b_seeded_run_is_reproducible() {
    let cities = five_cities();
    let m = DistanceMatrix::haversine(&cities).unwrap();
    let config = GaConfig::default()
        .with_population_size(10)
        .with_max_generations(20)
        .with_seed(2024);

    let first = GaRunner::run(&m, &config).unwrap();
    let second = GaRunner::run(&m, &config).unwrap();

    assert_eq!(first.best_tour, second.best_tour);
    assert_eq!(first.best_distance.to_bits(), second.best_distance.to_bits());
    assert_eq!(first.best_generation, second.best_generation);
    assert_eq!(first.distance_history, second.distance_history);

    let lengths: Vec<f64> = all_permutations(5).iter().map(|t| tour_length(t, &m)).collect();
    let worst = lengths.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let optimum = lengths.iter().cloned().fold(f64::INFINITY, f64::min);

    assert!(is_valid_tour(&first.best_tour, 5));
    assert!(first.best_distance <= worst);
    assert!(first.best_distance >= optimum - 1e-9);
}

#[test]
fn scenario_c_coincident_cities_finite_fitness() {
    let cities = [
        City::new(10.0, 20.0),
        City::new(10.0, 20.0),
        City::new(11.0, 21.0),
        City::new(12.0, 19.0),
    ];
    let m = DistanceMatrix::haversine(&cities).unwrap();
    assert_eq!(m.get(0, 1), 0.0);

    for tour in all_permutations(4) {
        assert!(fitness(&tour, &m).is_finite());
    }

    let config = GaConfig::default()
        .with_population_size(10)
        .with_max_generations(10)
        .with_seed(1);
    let result = GaRunner::run(&m, &config).unwrap();
    assert!(result.best_distance.is_finite());
}

#[test]
fn all_cities_coincide() {
    let cities = vec![City::new(-33.87, 151.21); 4];
    let m = DistanceMatrix::haversine(&cities).unwrap();

    let config = GaConfig::default()
        .with_population_size(5)
        .with_max_generations(5)
        .with_seed(9);
    let result = GaRunner::run(&m, &config).unwrap();
    assert_eq!(result.best_distance, 0.0);
    assert_eq!(result.best_generation, 0);

    let greedy = GreedyConstructor::construct(&m);
    assert_eq!(greedy.total_cost, 0.0);
    assert_eq!(greedy.tour, vec![0, 1, 2, 3, 0]);
}

#[test]
fn ga_matches_optimum_on_small_instance() {
    let cities = five_cities();
    let m = DistanceMatrix::haversine(&cities).unwrap();
    let optimum = all_permutations(5)
        .iter()
        .map(|t| tour_length(t, &m))
        .fold(f64::INFINITY, f64::min);

    let config = GaConfig::default()
        .with_population_size(30)
        .with_max_generations(100)
        .with_offspring_size(15)
        .with_seed(5);
    let result = GaRunner::run(&m, &config).unwrap();

    // 5 cities have only 12 distinct tours; the search covers them all.
    assert!((result.best_distance - optimum).abs() < 1e-6);
}

#[test]
fn input_and_config_errors_are_distinguished() {
    let one = [City::new(0.0, 0.0)];
    assert_eq!(
        DistanceMatrix::haversine(&one).unwrap_err(),
        TspError::InsufficientCities { found: 1 }
    );

    let m = DistanceMatrix::haversine(&five_cities()).unwrap();
    let err = GaRunner::run(&m, &GaConfig::default().with_population_size(0)).unwrap_err();
    assert!(matches!(err, TspError::Config(_)));
}
