//! Roulette experiment execution.

use super::config::RouletteConfig;
use super::types::{DriftSummary, GenerationBalance, RouletteResult};
use crate::cycle::{fold_cycles, CycleDriver};
use crate::error::ConfigError;
use crate::population::Population;
use crate::random::resolve_seed;
use crate::stats;
use rand::Rng;
use std::time::Instant;

/// Expected offspring count of every member: `ηᵢ = ρ·fᵢ / F`.
///
/// The values sum to the population size. The population must have a
/// positive total fitness.
pub fn expected_offspring(population: &Population) -> Vec<f64> {
    let size = population.len() as f64;
    let total = population.total_fitness();
    population
        .iter()
        .map(|m| size * m.fitness() / total)
        .collect()
}

/// Breeds one generation by spinning a weighted wheel `ρ` times.
///
/// Wheel sectors are the `ηᵢ` values laid out in population order; each
/// spin draws `u` uniformly from `[0, ρ)` and picks the member whose
/// sector contains it. A member may be picked any number of times.
///
/// Returns [`ConfigError::EmptyPopulation`] for an empty population and
/// [`ConfigError::ZeroTotalFitness`] when the wheel has no width.
pub fn spin<R: Rng + ?Sized>(
    population: &Population,
    rng: &mut R,
) -> Result<Population, ConfigError> {
    let size = population.len();
    if size == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    if !(population.total_fitness() > 0.0) {
        return Err(ConfigError::ZeroTotalFitness);
    }
    let eta = expected_offspring(population);

    let mut cumulative = Vec::with_capacity(size);
    let mut acc = 0.0;
    for e in &eta {
        acc += e;
        cumulative.push(acc);
    }
    // Rounding can leave the last boundary a hair below ρ.
    let last_live = eta.iter().rposition(|&e| e > 0.0).unwrap_or(0);

    let width = size as f64;
    Ok((0..size)
        .map(|_| {
            let u = rng.random_range(0.0..width);
            let idx = cumulative.partition_point(|&c| c <= u);
            population[idx.min(last_live)]
        })
        .collect())
}

/// Running totals over finished cycles: first drifted generation per
/// cycle, and majority/minority counts summed per generation.
struct DriftTally {
    first_drift: Vec<Option<usize>>,
    majority: Vec<usize>,
    minority: Vec<usize>,
}

impl DriftTally {
    fn new(generations: usize) -> Self {
        Self {
            first_drift: Vec::new(),
            majority: vec![0; generations],
            minority: vec![0; generations],
        }
    }

    /// Appends `later`, whose cycles all come after this tally's.
    fn merge(mut self, later: Self) -> Self {
        self.first_drift.extend(later.first_drift);
        for (a, b) in self.majority.iter_mut().zip(later.majority) {
            *a += b;
        }
        for (a, b) in self.minority.iter_mut().zip(later.minority) {
            *a += b;
        }
        self
    }
}

/// Fitness-proportionate selection engine tracking genetic drift.
///
/// # Usage
///
/// ```
/// use u_selection::population::PopulationShape;
/// use u_selection::roulette::{RouletteConfig, RouletteEngine};
///
/// let engine = RouletteEngine::new(PopulationShape::two_class(1.5).build(20)).unwrap();
/// let result = engine
///     .experiment(&RouletteConfig::new(50, 30).with_seed(1))
///     .unwrap();
/// assert_eq!(result.balance.len(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteEngine {
    initial: Population,
    classes: Vec<char>,
}

impl RouletteEngine {
    /// Validates the initial population: well-formed fitness values,
    /// positive total fitness and at least two attribute classes.
    pub fn new(initial: Population) -> Result<Self, ConfigError> {
        initial.validate()?;
        if initial.total_fitness() <= 0.0 {
            return Err(ConfigError::ZeroTotalFitness);
        }
        let classes = initial.attribute_classes();
        if classes.len() < 2 {
            return Err(ConfigError::InsufficientAttributes {
                found: classes.len(),
            });
        }
        Ok(Self { initial, classes })
    }

    pub fn initial(&self) -> &Population {
        &self.initial
    }

    /// Attribute classes of the initial population, sorted.
    pub fn classes(&self) -> &[char] {
        &self.classes
    }

    /// Runs `config.cycles` cycles of `config.generations` generations.
    pub fn experiment(&self, config: &RouletteConfig) -> Result<RouletteResult, ConfigError> {
        config.validate()?;
        let seed = resolve_seed(config.seed);
        log::info!(
            "roulette experiment: {} cycles x {} generations, population {}, seed {}",
            config.cycles,
            config.generations,
            self.initial.len(),
            seed
        );

        let start = Instant::now();
        let driver = CycleDriver::new(&self.initial, config.generations);
        let tally = fold_cycles(
            config.cycles,
            seed,
            config.parallel,
            || DriftTally::new(config.generations),
            |_, rng, tally: &mut DriftTally| {
                let mut first_drift = None;
                driver.run(rng, |pop, rng| spin(pop, rng), |generation, pop| {
                    let counts: Vec<usize> = self
                        .classes
                        .iter()
                        .map(|&c| pop.count_attribute(c))
                        .collect();
                    let present = counts.iter().filter(|&&n| n > 0).count();
                    if present < 2 && first_drift.is_none() {
                        first_drift = Some(generation);
                    }
                    let g = generation - 1;
                    tally.majority[g] += counts.iter().copied().max().unwrap_or(0);
                    tally.minority[g] += counts.iter().copied().min().unwrap_or(0);
                })?;
                tally.first_drift.push(first_drift);
                Ok(())
            },
            DriftTally::merge,
        )?;
        let elapsed = start.elapsed();

        let result = aggregate(config, seed, tally, elapsed);
        log::info!(
            "roulette experiment finished in {:?}: drift in {}/{} cycles",
            elapsed,
            result.drifted_cycles,
            result.cycles
        );
        Ok(result)
    }
}

fn aggregate(
    config: &RouletteConfig,
    seed: u64,
    tally: DriftTally,
    elapsed: std::time::Duration,
) -> RouletteResult {
    let DriftTally {
        first_drift,
        majority,
        minority,
    } = tally;
    let drifted: Vec<f64> = first_drift.iter().flatten().map(|&g| g as f64).collect();

    let drift = match (
        stats::mean(&drifted),
        stats::median(&drifted),
        first_drift.iter().flatten().min(),
    ) {
        (Some(mean), Some(median), Some(&earliest)) => Some(DriftSummary {
            mean,
            median,
            earliest,
        }),
        _ => None,
    };

    let cycles = first_drift.len() as f64;
    let balance = majority
        .into_iter()
        .zip(minority)
        .enumerate()
        .map(|(g, (majority, minority))| GenerationBalance {
            generation: g + 1,
            majority: majority as f64 / cycles,
            minority: minority as f64 / cycles,
        })
        .collect();

    RouletteResult {
        cycles: first_drift.len(),
        generations: config.generations,
        seed,
        drifted_cycles: drifted.len(),
        drift_ratio: drifted.len() as f64 / cycles,
        drift,
        balance,
        first_drift,
        elapsed,
    }
}
