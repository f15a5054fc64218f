//! Truncation experiment execution.

use super::config::TruncationConfig;
use super::types::{SurvivorRecord, TruncationResult};
use crate::cycle::{fold_cycles, CycleDriver};
use crate::error::ConfigError;
use crate::population::{FitnessKey, Member, Population};
use crate::random::resolve_seed;
use rand::Rng;
use std::time::{Duration, Instant};

/// Products this close to an integer are treated as that integer before
/// taking the ceiling, so `(1 − 0.7)·10` cuts 3 members, not 4.
const ROUNDING_TOLERANCE: f64 = 1e-9;

fn ceil_tolerant(x: f64) -> usize {
    let nearest = x.round();
    let value = if (x - nearest).abs() < ROUNDING_TOLERANCE {
        nearest
    } else {
        x.ceil()
    };
    value.max(0.0) as usize
}

/// Number of lowest-fitness members cut: `⌈(1 − threshold)·n⌉`, capped
/// at `n`.
pub fn cut_index(population_size: usize, threshold: f64) -> usize {
    ceil_tolerant((1.0 - threshold) * population_size as f64).min(population_size)
}

/// Offspring slots per survivor without replacement: `⌈1/threshold⌉`.
pub fn survivor_capacity(threshold: f64) -> usize {
    ceil_tolerant(1.0 / threshold).max(1)
}

/// Sorts a copy of `population` by fitness and returns the survivors of
/// the cut, lowest fitness first.
pub fn survivors(population: &Population, threshold: f64) -> Population {
    let mut sorted = population.clone();
    sorted.sort_by_fitness();
    let cut = cut_index(sorted.len(), threshold);
    Population::new(sorted[cut..].to_vec())
}

/// Draws `count` parents uniformly from `survivors`, with no cap.
///
/// Returns [`ConfigError::EmptyPopulation`] if `survivors` is empty and
/// `count > 0`.
pub fn select_with_replacement<R: Rng + ?Sized>(
    survivors: &[Member],
    count: usize,
    rng: &mut R,
) -> Result<Population, ConfigError> {
    if survivors.is_empty() && count > 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    Ok((0..count)
        .map(|_| survivors[rng.random_range(0..survivors.len())].without_attribute())
        .collect())
}

/// Draws `count` parents uniformly from the survivors that still have
/// offspring slots; each survivor has `capacity` slots.
///
/// Sampling only among open survivors is equivalent to re-rolling picks
/// of exhausted ones, without the unbounded loop. Returns
/// [`ConfigError::InsufficientCapacity`] if the slots run out before
/// `count` parents are chosen.
pub fn select_capacity_bounded<R: Rng + ?Sized>(
    survivors: &[Member],
    count: usize,
    capacity: usize,
    rng: &mut R,
) -> Result<Population, ConfigError> {
    if survivors.len().saturating_mul(capacity) < count {
        return Err(ConfigError::InsufficientCapacity {
            survivors: survivors.len(),
            capacity,
            population_size: count,
        });
    }

    let mut remaining = vec![capacity; survivors.len()];
    let mut open: Vec<usize> = (0..survivors.len()).collect();
    let mut next = Population::with_capacity(count);
    while next.len() < count {
        let slot = rng.random_range(0..open.len());
        let idx = open[slot];
        next.push(survivors[idx].without_attribute());
        remaining[idx] -= 1;
        if remaining[idx] == 0 {
            open.swap_remove(slot);
        }
    }
    Ok(next)
}

/// Running totals over finished cycles.
struct LossTally {
    cycles: usize,
    /// Members lost to duplication, summed over final generations.
    lost: usize,
    /// Per initial member, cycles whose final generation kept its fitness.
    survivals: Vec<usize>,
}

impl LossTally {
    fn new(population_size: usize) -> Self {
        Self {
            cycles: 0,
            lost: 0,
            survivals: vec![0; population_size],
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.cycles += other.cycles;
        self.lost += other.lost;
        for (a, b) in self.survivals.iter_mut().zip(other.survivals) {
            *a += b;
        }
        self
    }
}

/// Truncation ("cut") selection engine tracking material loss and
/// per-member survival.
#[derive(Debug, Clone)]
pub struct TruncationEngine {
    initial: Population,
}

impl TruncationEngine {
    pub fn new(initial: Population) -> Result<Self, ConfigError> {
        initial.validate()?;
        Ok(Self { initial })
    }

    pub fn initial(&self) -> &Population {
        &self.initial
    }

    /// Runs the experiment. Every configuration check, including the
    /// survivor capacity check, happens before the first cycle.
    pub fn experiment(&self, config: &TruncationConfig) -> Result<TruncationResult, ConfigError> {
        let size = self.initial.len();
        config.validate_for(size)?;
        let seed = resolve_seed(config.seed);
        let capacity = survivor_capacity(config.threshold);
        log::info!(
            "truncation experiment: {} cycles x {} generations, population {}, threshold {}, {}, seed {}",
            config.cycles,
            config.generations,
            size,
            config.threshold,
            if config.with_replacement {
                "with replacement"
            } else {
                "without replacement"
            },
            seed
        );

        let start = Instant::now();
        // Order is re-established by the fitness sort every generation.
        let driver = CycleDriver::new(&self.initial, config.generations).with_shuffle(false);
        let keys: Vec<FitnessKey> = self.initial.iter().map(Member::key).collect();
        let tally = fold_cycles(
            config.cycles,
            seed,
            config.parallel,
            || LossTally::new(size),
            |_, rng, tally: &mut LossTally| {
                let last = driver.run(
                    rng,
                    |pop, rng| {
                        let pool = survivors(pop, config.threshold);
                        if config.with_replacement {
                            select_with_replacement(&pool, size, rng)
                        } else {
                            select_capacity_bounded(&pool, size, capacity, rng)
                        }
                    },
                    |_, _| {},
                )?;
                let surviving = last.fitness_keys();
                tally.cycles += 1;
                tally.lost += size - surviving.len();
                // Every initial member in a surviving bucket is credited, so
                // duplicates of one fitness value all survive together.
                for (count, key) in tally.survivals.iter_mut().zip(&keys) {
                    if surviving.contains(key) {
                        *count += 1;
                    }
                }
                Ok(())
            },
            LossTally::merge,
        )?;
        let elapsed = start.elapsed();

        let result = self.aggregate(config, seed, tally, elapsed);
        log::info!(
            "truncation experiment finished in {:?}: material loss {:.4}, selection loss {:.4}",
            elapsed,
            result.material_loss,
            result.selection_loss
        );
        Ok(result)
    }

    fn aggregate(
        &self,
        config: &TruncationConfig,
        seed: u64,
        tally: LossTally,
        elapsed: Duration,
    ) -> TruncationResult {
        let cycles = tally.cycles;
        let survivors: Vec<SurvivorRecord> = self
            .initial
            .iter()
            .zip(tally.survivals)
            .enumerate()
            .map(|(index, (m, survivals))| SurvivorRecord {
                index,
                fitness: m.fitness(),
                survivals,
            })
            .collect();

        let material_loss = tally.lost as f64 / (cycles * self.initial.len()) as f64;
        let selection_loss = survivors
            .iter()
            .map(|r| r.selection_loss(cycles))
            .sum::<f64>()
            / survivors.len() as f64;

        TruncationResult {
            cycles,
            generations: config.generations,
            threshold: config.threshold,
            with_replacement: config.with_replacement,
            seed,
            material_loss,
            selection_loss,
            survivors,
            elapsed,
        }
    }
}
