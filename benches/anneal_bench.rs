//! Criterion benchmarks for the annealing engine.
//!
//! Random uniform instances of growing size, seeded so runs are stable
//! between invocations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::sa::{AnnealConfig, CoolingSchedule};
use tsp_anneal::tsp::{solve, City, DistanceMatrix, Tour, TourProblem};

fn random_instance(n: usize, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|id| City::new(id, rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_tour");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let cities = random_instance(n, 7);
        let problem = TourProblem::new(&cities).unwrap();
        let config = AnnealConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.01)
            .with_cooling(CoolingSchedule::Geometric { rate: 0.999 })
            .with_max_iterations(10_000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(problem, config), |b, (p, c)| {
            b.iter(|| {
                let result = solve(black_box(p), black_box(c)).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");

    for &n in &[100, 1_000] {
        let cities = random_instance(n, 11);
        let matrix = DistanceMatrix::new(&cities);
        let mut rng = StdRng::seed_from_u64(13);
        let tour = Tour::random(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, tour), |b, (m, t)| {
            b.iter(|| black_box(m.tour_length(black_box(t))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_anneal, bench_tour_length);
criterion_main!(benches);
