//! Monte Carlo experiments on selection pressure.
//!
//! Runs many independent selection cycles over small synthetic
//! populations and aggregates how each selection scheme behaves:
//!
//! - **Roulette**: fitness-proportionate sampling with replacement;
//!   measures genetic drift (loss of an attribute class through sampling
//!   variance alone).
//! - **Truncation**: cut the weakest `⌈(1 − T)·n⌉` members and resample the
//!   rest, with or without a per-survivor offspring cap; measures material
//!   loss and per-member survival.
//! - **Tournament**: q-ary tournaments; measures take-over time of the best
//!   member and how often it succeeds, stalls, or dies out.
//!
//! There is no crossover or mutation: selection is simulated in isolation.
//!
//! # Architecture
//!
//! - [`population`]: members, generations and synthetic initial populations
//! - [`cycle`]: the clone → shuffle → evolve loop shared by all engines,
//!   and the cycle fan-out (sequential or rayon)
//! - [`roulette`], [`truncation`], [`tournament`]: the three engines
//! - [`report`]: plain-text rendering of results
//!
//! Every experiment takes an explicit seed (or draws one and reports it),
//! so runs are reproducible.

pub mod cycle;
pub mod error;
pub mod population;
pub mod random;
pub mod report;
pub mod roulette;
pub mod stats;
pub mod tournament;
pub mod truncation;

pub use error::ConfigError;
