//! Criterion benchmarks for the selection engines.
//!
//! Uses the standard synthetic populations to measure per-generation
//! selection cost and whole-experiment throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_selection::population::PopulationShape;
use u_selection::random::create_rng;
use u_selection::roulette::{spin, RouletteConfig, RouletteEngine};
use u_selection::tournament::{tournament_generation, TournamentConfig, TournamentEngine};
use u_selection::truncation::{
    select_capacity_bounded, survivor_capacity, survivors, TruncationConfig, TruncationEngine,
};

// ===========================================================================
// Single generation
// ===========================================================================

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for &n in &[100usize, 1_000, 10_000] {
        let pop = PopulationShape::NonLinear.build(n);

        group.bench_with_input(BenchmarkId::new("roulette", n), &pop, |b, p| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(spin(black_box(p), &mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("tournament_q5", n), &pop, |b, p| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(tournament_generation(black_box(p), 5, &mut rng)))
        });

        group.bench_with_input(BenchmarkId::new("truncation_bounded", n), &pop, |b, p| {
            let mut rng = create_rng(42);
            let capacity = survivor_capacity(0.3);
            b.iter(|| {
                let pool = survivors(black_box(p), 0.3);
                black_box(select_capacity_bounded(&pool, n, capacity, &mut rng))
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Whole experiments
// ===========================================================================

fn bench_experiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("experiment");
    group.sample_size(10);

    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "serial" };

        let engine = RouletteEngine::new(PopulationShape::two_class(1.5).build(100))
            .expect("valid population");
        let config = RouletteConfig::new(200, 20)
            .with_seed(42)
            .with_parallel(parallel);
        group.bench_function(BenchmarkId::new("roulette", label), |b| {
            b.iter(|| black_box(engine.experiment(black_box(&config))))
        });

        let engine = TruncationEngine::new(PopulationShape::NonLinear.build(100))
            .expect("valid population");
        let config = TruncationConfig::new(200, 20, 0.5)
            .with_replacement(false)
            .with_seed(42)
            .with_parallel(parallel);
        group.bench_function(BenchmarkId::new("truncation", label), |b| {
            b.iter(|| black_box(engine.experiment(black_box(&config))))
        });

        let shape = PopulationShape::Constant { base: 1.0, top: 2.0 };
        let engine =
            TournamentEngine::new(shape.build(100), Some(shape)).expect("valid population");
        let config = TournamentConfig::new(5, 200, 30)
            .with_seed(42)
            .with_parallel(parallel);
        group.bench_function(BenchmarkId::new("tournament", label), |b| {
            b.iter(|| black_box(engine.experiment(black_box(&config))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_experiment);
criterion_main!(benches);
