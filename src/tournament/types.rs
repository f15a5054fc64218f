//! Tournament experiment results.

use crate::population::PopulationShape;
use std::time::Duration;

/// Take-over milestones, in percent of the population.
pub const MILESTONE_PERCENTS: [u32; 5] = [20, 40, 60, 80, 100];

/// How a cycle ended for the best initial member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TakeoverOutcome {
    /// Its copies fill the whole final generation.
    Success,
    /// Some, but not all, of the final generation are its copies.
    Partial,
    /// It died out.
    Failure,
}

/// Mean generation at which each milestone was first reached, over the
/// successful cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MilestoneAverages {
    /// Indexed like [`MILESTONE_PERCENTS`].
    pub generations: [f64; 5],
}

impl MilestoneAverages {
    /// Mean generation for `percent`, if it is one of the milestones.
    pub fn at(&self, percent: u32) -> Option<f64> {
        MILESTONE_PERCENTS
            .iter()
            .position(|&p| p == percent)
            .map(|i| self.generations[i])
    }

    /// `(percent, mean generation)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        MILESTONE_PERCENTS.iter().copied().zip(self.generations.iter().copied())
    }
}

/// Aggregated statistics of a tournament experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TournamentResult {
    pub q: usize,
    pub cycles: usize,
    pub generations: usize,
    pub population_size: usize,

    /// Seed the experiment ran with.
    pub seed: u64,

    /// Shape of the initial population, when known.
    pub shape: Option<PopulationShape>,

    /// Fitness of the best initial member.
    pub top_fitness: f64,

    pub successes: usize,
    pub partials: usize,
    pub failures: usize,

    /// `None` when no cycle ended in a full take-over.
    pub milestones: Option<MilestoneAverages>,

    /// Outcome of each cycle, in cycle order.
    pub outcomes: Vec<TakeoverOutcome>,

    pub elapsed: Duration,
}

impl TournamentResult {
    /// Fraction of cycles that ended in a full take-over.
    pub fn success_ratio(&self) -> f64 {
        self.successes as f64 / self.cycles as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_lookup() {
        let m = MilestoneAverages {
            generations: [1.0, 2.0, 3.5, 4.0, 6.25],
        };
        assert_eq!(m.at(20), Some(1.0));
        assert_eq!(m.at(60), Some(3.5));
        assert_eq!(m.at(100), Some(6.25));
        assert_eq!(m.at(50), None);
        let pairs: Vec<(u32, f64)> = m.iter().collect();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[4], (100, 6.25));
    }
}
