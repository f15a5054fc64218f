//! Roulette experiment results.

use std::time::Duration;

/// When genetic drift struck, over the cycles that drifted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriftSummary {
    /// Mean first drifted generation.
    pub mean: f64,

    /// Median first drifted generation.
    pub median: f64,

    /// Earliest first drifted generation over all cycles.
    pub earliest: usize,
}

/// Mean majority / minority attribute counts of one generation, averaged
/// over all cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationBalance {
    /// 1-based generation index.
    pub generation: usize,
    pub majority: f64,
    pub minority: f64,
}

/// Aggregated statistics of a roulette experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouletteResult {
    pub cycles: usize,
    pub generations: usize,

    /// Seed the experiment ran with.
    pub seed: u64,

    /// Number of cycles in which drift occurred.
    pub drifted_cycles: usize,

    /// `drifted_cycles / cycles`.
    pub drift_ratio: f64,

    /// `None` when no cycle drifted.
    pub drift: Option<DriftSummary>,

    /// One entry per generation.
    pub balance: Vec<GenerationBalance>,

    /// First drifted generation of each cycle, `None` for cycles that
    /// kept their diversity.
    pub first_drift: Vec<Option<usize>>,

    pub elapsed: Duration,
}
