//! End-to-end selection scenarios.

use u_selection::population::{Member, Population, PopulationShape};
use u_selection::random::create_rng;
use u_selection::roulette::{spin, RouletteConfig, RouletteEngine};
use u_selection::tournament::{tournament_generation, TournamentConfig, TournamentEngine};
use u_selection::truncation::{
    select_capacity_bounded, select_with_replacement, survivors, TruncationConfig,
    TruncationEngine,
};
use u_selection::ConfigError;

fn mean_fitness(pop: &Population) -> f64 {
    pop.total_fitness() / pop.len() as f64
}

// ---- Shuffle fairness ----

#[test]
fn test_shuffle_position_uniform_small_population() {
    let n = 5;
    let pop: Population = (0..n).map(|i| Member::new(i as f64)).collect();
    let mut rng = create_rng(1);
    let trials = 20_000;
    let mut slot_counts = vec![0usize; n];
    for _ in 0..trials {
        let mut p = pop.clone();
        p.shuffle(&mut rng);
        let slot = p.iter().position(|m| m.fitness() == 0.0).unwrap();
        slot_counts[slot] += 1;
    }
    for &c in &slot_counts {
        let freq = c as f64 / trials as f64;
        assert!((freq - 0.2).abs() < 0.02, "slot frequencies {slot_counts:?}");
    }
}

#[test]
fn test_shuffle_moves_members_beyond_index_99() {
    let n = 150;
    let pop: Population = (0..n).map(|i| Member::new(i as f64)).collect();
    let mut rng = create_rng(2);
    let trials = 3000;
    let mut stayed = 0;
    for _ in 0..trials {
        let mut p = pop.clone();
        p.shuffle(&mut rng);
        if p[140].fitness() == 140.0 {
            stayed += 1;
        }
    }
    // expected 3000 / 150 = 20
    assert!(stayed < 50, "member 140 stayed put {stayed}/{trials} times");
}

// ---- Roulette ----

#[test]
fn test_roulette_offspring_of_dominant_member() {
    let mut members = vec![Member::new(1.0); 99];
    members.push(Member::new(100.0));
    let pop = Population::new(members);
    let expected = 100.0 * 100.0 / 199.0;

    let mut rng = create_rng(3);
    let trials = 3000;
    let mut total = 0usize;
    for _ in 0..trials {
        total += spin(&pop, &mut rng)
            .unwrap()
            .iter()
            .filter(|m| m.fitness() == 100.0)
            .count();
    }
    let observed = total as f64 / trials as f64;
    assert!(
        (observed - expected).abs() < 0.5,
        "expected {expected:.2}, observed {observed:.2}"
    );
}

#[test]
fn test_roulette_drift_without_selection_pressure() {
    // equal fitness: only sampling variance acts; a population of 20 fixes
    // one attribute within a few dozen generations
    let engine = RouletteEngine::new(PopulationShape::two_class(1.0).build(20)).unwrap();
    let result = engine
        .experiment(&RouletteConfig::new(1000, 100).with_seed(4))
        .unwrap();
    assert!(
        result.drift_ratio > 0.9,
        "drift in only {:.1}% of cycles",
        result.drift_ratio * 100.0
    );
    let summary = result.drift.unwrap();
    assert!(summary.earliest >= 1);
    assert!(summary.median > 5.0 && summary.median < 60.0);
}

#[test]
fn test_roulette_majority_grows_over_generations() {
    let engine = RouletteEngine::new(PopulationShape::two_class(1.0).build(100)).unwrap();
    let result = engine
        .experiment(&RouletteConfig::new(1000, 20).with_seed(5))
        .unwrap();
    let first = result.balance[0];
    let last = result.balance[19];
    assert!(last.majority > first.majority + 5.0);
    assert!(last.minority < first.minority - 5.0);
}

#[test]
fn test_roulette_reproducible_across_parallelism() {
    let engine = RouletteEngine::new(PopulationShape::two_class(1.5).build(40)).unwrap();
    let config = RouletteConfig::new(100, 30).with_seed(6);
    let parallel = engine.experiment(&config).unwrap();
    let serial = engine.experiment(&config.clone().with_parallel(false)).unwrap();
    assert_eq!(parallel.first_drift, serial.first_drift);
    assert_eq!(parallel.balance, serial.balance);
    assert_eq!(parallel.drift, serial.drift);
}

// ---- Truncation ----

#[test]
fn test_truncation_threshold_one_is_pure_resampling() {
    let pop = PopulationShape::NonLinear.build(100);
    let initial_mean = mean_fitness(&pop);

    // no cut: the whole population is the survivor pool
    let pool = survivors(&pop, 1.0);
    assert_eq!(pool.len(), 100);

    let mut rng = create_rng(7);
    let trials = 2000;
    let mut acc = 0.0;
    for _ in 0..trials {
        acc += mean_fitness(&select_with_replacement(&pool, 100, &mut rng).unwrap());
    }
    let resampled_mean = acc / trials as f64;
    assert!(
        (resampled_mean - initial_mean).abs() < 0.02,
        "mean drifted from {initial_mean:.4} to {resampled_mean:.4}"
    );

    // without replacement each member fills exactly one slot
    let next = select_capacity_bounded(&pool, 100, 1, &mut rng).unwrap();
    let mut a: Vec<u64> = pop.iter().map(|m| m.fitness().to_bits()).collect();
    let mut b: Vec<u64> = next.iter().map(|m| m.fitness().to_bits()).collect();
    a.sort_unstable();
    b.sort_unstable();
    assert_eq!(a, b);
}

#[test]
fn test_truncation_threshold_one_material_loss_matches_resampling() {
    // one round of resampling keeps n(1 - (1 - 1/n)^n) distinct values
    let engine = TruncationEngine::new(PopulationShape::NonLinear.build(100)).unwrap();
    let result = engine
        .experiment(&TruncationConfig::new(500, 1, 1.0).with_seed(8))
        .unwrap();
    let expected = (1.0 - 1.0 / 100.0f64).powi(100);
    assert!(
        (result.material_loss - expected).abs() < 0.01,
        "material loss {:.4}, expected {:.4}",
        result.material_loss,
        expected
    );
}

#[test]
fn test_truncation_without_replacement_loses_less() {
    let engine = TruncationEngine::new(PopulationShape::NonLinear.build(100)).unwrap();
    let base = TruncationConfig::new(300, 1, 0.5).with_seed(9);
    let with = engine.experiment(&base).unwrap();
    let without = engine
        .experiment(&base.clone().with_replacement(false))
        .unwrap();
    // capacity 2 with 50 survivors: every survivor breeds exactly twice
    assert!((without.material_loss - 0.5).abs() < 1e-12);
    // uniform draws keep about 50(1 - 0.98^100) distinct survivors
    assert!(with.material_loss > 0.53 && with.material_loss < 0.6);
}

#[test]
fn test_truncation_best_member_always_survives_without_replacement() {
    let engine = TruncationEngine::new(PopulationShape::NonLinear.build(100)).unwrap();
    let result = engine
        .experiment(
            &TruncationConfig::new(100, 10, 0.5)
                .with_replacement(false)
                .with_seed(10),
        )
        .unwrap();
    // capacity 2 and 50 survivors: every survivor breeds exactly twice, so
    // the top half of the initial population is never lost
    let best = result.survivors.last().unwrap();
    assert_eq!(best.survivals, 100);
}

#[test]
fn test_truncation_bad_configuration_fails_fast() {
    let engine = TruncationEngine::new(PopulationShape::NonLinear.build(10)).unwrap();
    assert_eq!(
        engine
            .experiment(&TruncationConfig::new(10, 10, 1.5))
            .unwrap_err(),
        ConfigError::InvalidThreshold(1.5)
    );
    assert!(matches!(
        engine.experiment(&TruncationConfig::new(10, 10, 0.15).with_replacement(false)),
        Err(ConfigError::InsufficientCapacity { .. })
    ));
}

// ---- Tournament ----

#[test]
fn test_tournament_takeover_succeeds_and_improves_with_generations() {
    let shape = PopulationShape::Constant { base: 1.0, top: 2.0 };
    let engine = TournamentEngine::new(shape.build(100), Some(shape)).unwrap();

    let short = engine
        .experiment(&TournamentConfig::new(5, 500, 3).with_seed(11))
        .unwrap();
    let long = engine
        .experiment(&TournamentConfig::new(5, 500, 30).with_seed(11))
        .unwrap();

    assert!(long.successes > 0);
    assert!(long.successes > short.successes);
    assert!(long.success_ratio() > 0.9);
    let m = long.milestones.unwrap();
    assert!(m.at(20).unwrap() < m.at(100).unwrap());
}

#[test]
fn test_tournament_takeover_ratio_non_decreasing_in_expectation() {
    let shape = PopulationShape::Constant { base: 1.0, top: 2.0 };
    let engine = TournamentEngine::new(shape.build(100), None).unwrap();
    let mut rng = create_rng(12);
    let trials = 500;
    let generations = 4;
    let mut mean_ratio = vec![0.0; generations];
    for _ in 0..trials {
        let mut pop = engine.initial().clone();
        for slot in mean_ratio.iter_mut() {
            pop = tournament_generation(&pop, 5, &mut rng).unwrap();
            *slot += engine.takeover_ratio(&pop) / trials as f64;
        }
    }
    for w in mean_ratio.windows(2) {
        assert!(w[1] + 1e-9 >= w[0], "mean ratio fell: {mean_ratio:?}");
    }
    assert!(mean_ratio[0] > 0.01);
}

#[test]
fn test_tournament_rejects_q_one() {
    let engine = TournamentEngine::new(PopulationShape::NonLinear.build(10), None).unwrap();
    assert_eq!(
        engine
            .experiment(&TournamentConfig::new(1, 10, 10))
            .unwrap_err(),
        ConfigError::InvalidTournamentSize(1)
    );
}

#[test]
fn test_tournament_reproducible_across_parallelism() {
    let engine = TournamentEngine::new(PopulationShape::NonLinear.build(50), None).unwrap();
    let config = TournamentConfig::new(3, 80, 12).with_seed(13);
    let a = engine.experiment(&config).unwrap();
    let b = engine.experiment(&config.clone().with_parallel(false)).unwrap();
    assert_eq!(a.outcomes, b.outcomes);
    assert_eq!(a.milestones, b.milestones);
}
