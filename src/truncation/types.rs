//! Truncation experiment results.

use std::time::Duration;

/// Survival record of one initial member.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurvivorRecord {
    /// Position in the initial population.
    pub index: usize,

    pub fitness: f64,

    /// Cycles whose final generation still held this member's fitness.
    pub survivals: usize,
}

impl SurvivorRecord {
    /// Fraction of `cycles` in which this member survived.
    pub fn survival_ratio(&self, cycles: usize) -> f64 {
        self.survivals as f64 / cycles as f64
    }

    /// Fraction of `cycles` in which this member was lost.
    pub fn selection_loss(&self, cycles: usize) -> f64 {
        (cycles - self.survivals) as f64 / cycles as f64
    }
}

/// Aggregated statistics of a truncation experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruncationResult {
    pub cycles: usize,
    pub generations: usize,
    pub threshold: f64,
    pub with_replacement: bool,

    /// Seed the experiment ran with.
    pub seed: u64,

    /// Mean over cycles of `(n − distinct fitness values) / n` in the
    /// final generation.
    pub material_loss: f64,

    /// Mean over initial members of their selection loss.
    pub selection_loss: f64,

    /// One record per initial member, in initial order.
    pub survivors: Vec<SurvivorRecord>,

    pub elapsed: Duration,
}
