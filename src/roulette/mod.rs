//! Fitness-proportionate ("roulette wheel") selection with replacement.
//!
//! Each generation is bred by `ρ` independent spins of a wheel whose
//! sectors are the members' expected offspring counts `ηᵢ = ρ·fᵢ/F`.
//! The engine tracks genetic drift: the loss of every member of some
//! attribute class through sampling variance alone.
//!
//! # Key Types
//!
//! - [`RouletteConfig`]: cycle and generation counts, seed, parallelism
//! - [`RouletteEngine`]: runs the experiment over an initial population
//! - [`RouletteResult`]: drift rate, drift onset statistics, per-generation
//!   majority/minority balance
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Kimura & Ohta (1969), "The average number of generations until
//!   fixation of a mutant gene in a finite population"

mod config;
mod runner;
mod types;

pub use config::RouletteConfig;
pub use runner::{expected_offspring, spin, RouletteEngine};
pub use types::{DriftSummary, GenerationBalance, RouletteResult};
