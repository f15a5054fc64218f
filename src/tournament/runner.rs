//! Tournament experiment execution.

use super::config::TournamentConfig;
use super::types::{MilestoneAverages, TakeoverOutcome, TournamentResult, MILESTONE_PERCENTS};
use crate::cycle::{run_cycles, CycleDriver};
use crate::error::ConfigError;
use crate::population::{FitnessKey, Member, Population, PopulationShape};
use crate::random::resolve_seed;
use rand::Rng;
use std::time::Instant;

/// One tournament: `q` competitors drawn with replacement, the first one
/// with strictly maximal fitness wins.
///
/// Returns [`ConfigError::EmptyPopulation`] if `population` is empty.
pub fn tournament<R: Rng + ?Sized>(
    population: &Population,
    q: usize,
    rng: &mut R,
) -> Result<Member, ConfigError> {
    let n = population.len();
    if n == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    let mut winner = population[rng.random_range(0..n)];
    for _ in 1..q.max(1) {
        let challenger = population[rng.random_range(0..n)];
        if challenger.fitness() > winner.fitness() {
            winner = challenger;
        }
    }
    Ok(winner)
}

/// Breeds one generation from `population.len()` independent tournaments.
pub fn tournament_generation<R: Rng + ?Sized>(
    population: &Population,
    q: usize,
    rng: &mut R,
) -> Result<Population, ConfigError> {
    (0..population.len())
        .map(|_| tournament(population, q, rng))
        .collect()
}

/// Number of take-over milestones met when `count` of `size` members
/// carry the top fitness: `⌊5·count/size⌋`.
pub fn milestones_reached(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    (count * MILESTONE_PERCENTS.len() / size).min(MILESTONE_PERCENTS.len())
}

struct CycleOutcome {
    outcome: TakeoverOutcome,
    /// Generation at which each milestone was first met; full only for
    /// successful cycles.
    reached: Vec<usize>,
}

/// q-tournament selection engine tracking take-over of the best member.
#[derive(Debug, Clone)]
pub struct TournamentEngine {
    initial: Population,
    shape: Option<PopulationShape>,
    top: FitnessKey,
}

impl TournamentEngine {
    /// `shape` only feeds reports.
    pub fn new(initial: Population, shape: Option<PopulationShape>) -> Result<Self, ConfigError> {
        initial.validate()?;
        let top = initial
            .max_fitness()
            .map(FitnessKey::of)
            .ok_or(ConfigError::EmptyPopulation)?;
        Ok(Self {
            initial,
            shape,
            top,
        })
    }

    pub fn initial(&self) -> &Population {
        &self.initial
    }

    /// Fitness whose take-over is tracked.
    pub fn top_fitness(&self) -> f64 {
        self.top.fitness()
    }

    /// Fraction of `population` carrying the top initial fitness.
    pub fn takeover_ratio(&self, population: &Population) -> f64 {
        population.count_fitness(self.top) as f64 / population.len() as f64
    }

    pub fn experiment(&self, config: &TournamentConfig) -> Result<TournamentResult, ConfigError> {
        config.validate()?;
        let seed = resolve_seed(config.seed);
        let size = self.initial.len();
        log::info!(
            "tournament experiment: q = {}, {} cycles x {} generations, population {}, seed {}",
            config.q,
            config.cycles,
            config.generations,
            size,
            seed
        );

        let start = Instant::now();
        let driver = CycleDriver::new(&self.initial, config.generations);
        let outcomes = run_cycles(config.cycles, seed, config.parallel, |_, rng| {
            let mut reached = Vec::with_capacity(MILESTONE_PERCENTS.len());
            let last = driver.run(
                rng,
                |pop, rng| tournament_generation(pop, config.q, rng),
                |generation, pop| {
                    let level = milestones_reached(pop.count_fitness(self.top), size);
                    while reached.len() < level {
                        reached.push(generation);
                    }
                },
            )?;
            let count = last.count_fitness(self.top);
            let outcome = if count == size {
                TakeoverOutcome::Success
            } else if count > 0 {
                TakeoverOutcome::Partial
            } else {
                TakeoverOutcome::Failure
            };
            Ok(CycleOutcome { outcome, reached })
        })?;
        let elapsed = start.elapsed();

        let count_of = |o: TakeoverOutcome| outcomes.iter().filter(|c| c.outcome == o).count();
        let successes = count_of(TakeoverOutcome::Success);

        let mut sums = [0usize; 5];
        for c in outcomes
            .iter()
            .filter(|c| c.outcome == TakeoverOutcome::Success)
        {
            for (sum, &g) in sums.iter_mut().zip(&c.reached) {
                *sum += g;
            }
        }
        let milestones = (successes > 0).then(|| MilestoneAverages {
            generations: sums.map(|s| s as f64 / successes as f64),
        });

        let result = TournamentResult {
            q: config.q,
            cycles: config.cycles,
            generations: config.generations,
            population_size: size,
            seed,
            shape: self.shape.clone(),
            top_fitness: self.top.fitness(),
            successes,
            partials: count_of(TakeoverOutcome::Partial),
            failures: count_of(TakeoverOutcome::Failure),
            milestones,
            outcomes: outcomes.iter().map(|c| c.outcome).collect(),
            elapsed,
        };
        log::info!(
            "tournament experiment finished in {:?}: {} successes, {} partial, {} failures",
            elapsed,
            result.successes,
            result.partials,
            result.failures
        );
        Ok(result)
    }
}
