//! Shared cycle skeleton.
//!
//! Every engine runs the same loop: clone the initial population,
//! optionally shuffle it once, then replace it generation by generation.
//! [`CycleDriver`] owns that loop; engines supply the per-generation
//! transition and an observer for per-generation statistics.
//!
//! [`run_cycles`] and [`fold_cycles`] fan independent cycles out, each
//! with its own RNG derived from the experiment seed. `run_cycles`
//! returns one outcome per cycle in cycle order; `fold_cycles` merges
//! each cycle into a running accumulator as soon as it ends, so memory
//! stays flat in the number of cycles.

use crate::error::ConfigError;
use crate::population::Population;
use crate::random::{create_rng, cycle_seed, SimRng};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one cycle over a borrowed initial population.
#[derive(Debug, Clone, Copy)]
pub struct CycleDriver<'a> {
    initial: &'a Population,
    generations: usize,
    shuffle: bool,
}

impl<'a> CycleDriver<'a> {
    /// Driver that shuffles the cloned population before the first
    /// generation.
    pub fn new(initial: &'a Population, generations: usize) -> Self {
        Self {
            initial,
            generations,
            shuffle: true,
        }
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Evolves a fresh clone of the initial population.
    ///
    /// `step` builds generation `g` from generation `g - 1`; `observe`
    /// sees each new generation with its 1-based index. Returns the
    /// final generation.
    pub fn run<R, F, O>(
        &self,
        rng: &mut R,
        mut step: F,
        mut observe: O,
    ) -> Result<Population, ConfigError>
    where
        R: Rng + ?Sized,
        F: FnMut(&Population, &mut R) -> Result<Population, ConfigError>,
        O: FnMut(usize, &Population),
    {
        let mut current = self.initial.clone();
        if self.shuffle {
            current.shuffle(rng);
        }
        for generation in 1..=self.generations {
            current = step(&current, &mut *rng)?;
            observe(generation, &current);
        }
        Ok(current)
    }
}

/// Rejects zero cycle or generation counts.
pub(crate) fn check_counts(cycles: usize, generations: usize) -> Result<(), ConfigError> {
    if cycles == 0 {
        return Err(ConfigError::ZeroCycles);
    }
    if generations == 0 {
        return Err(ConfigError::ZeroGenerations);
    }
    Ok(())
}

/// Runs `cycles` independent cycles and returns their outcomes in cycle
/// order.
///
/// Cycle `i` gets an RNG seeded with [`cycle_seed`]`(seed, i)`. With the
/// `parallel` feature and `parallel == true`, cycles run on the rayon
/// pool.
pub fn run_cycles<T, F>(
    cycles: usize,
    seed: u64,
    parallel: bool,
    cycle: F,
) -> Result<Vec<T>, ConfigError>
where
    T: Send,
    F: Fn(usize, &mut SimRng) -> Result<T, ConfigError> + Sync,
{
    let run_one = |index: usize| {
        let mut rng = create_rng(cycle_seed(seed, index));
        let outcome = cycle(index, &mut rng);
        log::debug!("cycle {index} finished");
        outcome
    };

    #[cfg(feature = "parallel")]
    {
        if parallel {
            return (0..cycles).into_par_iter().map(&run_one).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..cycles).map(&run_one).collect()
}

/// Runs `cycles` independent cycles, recording each one into an
/// accumulator as soon as it finishes.
///
/// `empty` builds a fresh accumulator, `cycle` runs cycle `i` and records
/// it, and `merge` joins the accumulators of two adjacent cycle ranges,
/// left range first. Cycle `i` draws from the same RNG as in
/// [`run_cycles`], so a fixed seed gives the same accumulator serially
/// and on rayon as long as `merge` is associative.
pub fn fold_cycles<A, E, F, M>(
    cycles: usize,
    seed: u64,
    parallel: bool,
    empty: E,
    cycle: F,
    merge: M,
) -> Result<A, ConfigError>
where
    A: Send,
    E: Fn() -> A + Sync + Send,
    F: Fn(usize, &mut SimRng, &mut A) -> Result<(), ConfigError> + Sync + Send,
    M: Fn(A, A) -> A + Sync + Send,
{
    let record = |mut acc: A, index: usize| -> Result<A, ConfigError> {
        let mut rng = create_rng(cycle_seed(seed, index));
        cycle(index, &mut rng, &mut acc)?;
        log::debug!("cycle {index} finished");
        Ok(acc)
    };

    #[cfg(feature = "parallel")]
    {
        if parallel {
            return (0..cycles)
                .into_par_iter()
                .try_fold(&empty, &record)
                .try_reduce(&empty, |a, b| Ok(merge(a, b)));
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = (parallel, &merge);

    (0..cycles).try_fold(empty(), record)
}
