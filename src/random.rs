//! Seedable randomness for experiments.
//!
//! Every cycle of an experiment draws from its own generator, derived
//! from the experiment seed and the cycle index. A fixed experiment seed
//! therefore reproduces every cycle exactly, whether cycles run
//! sequentially or in parallel.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generator type used by all engines.
pub type SimRng = StdRng;

/// Creates a generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> SimRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional configured seed, drawing a fresh one for `None`.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Derives the seed of cycle `cycle` from the experiment seed.
///
/// SplitMix64 finalizer over `seed + cycle * golden_gamma`, so adjacent
/// cycles get uncorrelated streams.
pub fn cycle_seed(seed: u64, cycle: usize) -> u64 {
    let mut z = seed.wrapping_add((cycle as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform in-place permutation (Fisher–Yates over the full slice length).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
