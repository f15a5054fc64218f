//! Roulette experiment configuration.

use crate::cycle::check_counts;
use crate::error::ConfigError;

/// Configuration of a roulette (fitness-proportionate) experiment.
///
/// # Examples
///
/// ```
/// use u_selection::roulette::RouletteConfig;
///
/// let config = RouletteConfig::new(1000, 20).with_seed(7).with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouletteConfig {
    /// Number of independent selection cycles.
    pub cycles: usize,

    /// Generations evolved in every cycle.
    pub generations: usize,

    /// Whether to spread cycles over the rayon pool.
    pub parallel: bool,

    /// Experiment seed. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            cycles: 1000,
            generations: 20,
            parallel: true,
            seed: None,
        }
    }
}

impl RouletteConfig {
    pub fn new(cycles: usize, generations: usize) -> Self {
        Self {
            cycles,
            generations,
            ..Self::default()
        }
    }

    pub fn with_cycles(mut self, n: usize) -> Self {
        self.cycles = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_counts(self.cycles, self.generations)
    }
}
