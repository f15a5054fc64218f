//! Truncation experiment configuration.

use super::runner::{cut_index, survivor_capacity};
use crate::cycle::check_counts;
use crate::error::ConfigError;

/// Configuration of a truncation ("cut") experiment.
///
/// # Examples
///
/// ```
/// use u_selection::truncation::TruncationConfig;
///
/// let config = TruncationConfig::new(500, 10, 0.5).with_replacement(false);
/// assert!(config.validate_for(100).is_ok());
/// assert!(config.clone().with_threshold(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TruncationConfig {
    /// Number of independent selection cycles.
    pub cycles: usize,

    /// Generations evolved in every cycle.
    pub generations: usize,

    /// Fraction of the population kept as parents, in `(0, 1]`.
    ///
    /// The lowest `⌈(1 − threshold)·n⌉` members are cut every generation.
    pub threshold: f64,

    /// Whether survivors may become parents without limit.
    ///
    /// When `false`, each survivor has `⌈1/threshold⌉` offspring slots.
    pub with_replacement: bool,

    /// Whether to spread cycles over the rayon pool.
    pub parallel: bool,

    /// Experiment seed. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for TruncationConfig {
    fn default() -> Self {
        Self {
            cycles: 1000,
            generations: 20,
            threshold: 0.5,
            with_replacement: true,
            parallel: true,
            seed: None,
        }
    }
}

impl TruncationConfig {
    pub fn new(cycles: usize, generations: usize, threshold: f64) -> Self {
        Self {
            cycles,
            generations,
            threshold,
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

    /// Sets the threshold. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_replacement(mut self, with_replacement: bool) -> Self {
        self.with_replacement = with_replacement;
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

    /// Validates counts and threshold range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_counts(self.cycles, self.generations)?;
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Validates the configuration against a population size: the cut
    /// must leave survivors, and without replacement their slots must
    /// fill a whole generation.
    pub fn validate_for(&self, population_size: usize) -> Result<(), ConfigError> {
        self.validate()?;
        let survivors = population_size - cut_index(population_size, self.threshold);
        if survivors == 0 {
            return Err(ConfigError::EmptySurvivorPool {
                threshold: self.threshold,
                population_size,
            });
        }
        if !self.with_replacement {
            let capacity = survivor_capacity(self.threshold);
            if survivors.saturating_mul(capacity) < population_size {
                return Err(ConfigError::InsufficientCapacity {
                    survivors,
                    capacity,
                    population_size,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TruncationConfig::default();
        assert_eq!(config.cycles, 1000);
        assert_eq!(config.generations, 20);
        assert!((config.threshold - 0.5).abs() < 1e-12);
        assert!(config.with_replacement);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TruncationConfig::default()
            .with_cycles(3)
            .with_generations(4)
            .with_threshold(0.25)
            .with_replacement(false)
            .with_parallel(false)
            .with_seed(9);
        assert_eq!(config.cycles, 3);
        assert_eq!(config.generations, 4);
        assert!((config.threshold - 0.25).abs() < 1e-12);
        assert!(!config.with_replacement);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_threshold_range() {
        for bad in [0.0, -0.1, 1.0001, f64::NAN] {
            let err = TruncationConfig::new(1, 1, bad).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold(_)));
        }
        assert!(TruncationConfig::new(1, 1, 1.0).validate().is_ok());
        assert!(TruncationConfig::new(1, 1, 1e-6).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_counts() {
        assert_eq!(
            TruncationConfig::new(0, 1, 0.5).validate(),
            Err(ConfigError::ZeroCycles)
        );
        assert_eq!(
            TruncationConfig::new(1, 0, 0.5).validate(),
            Err(ConfigError::ZeroGenerations)
        );
    }

    #[test]
    fn test_validate_for_empty_pool() {
        // 10 * 0.05 leaves no survivor
        let err = TruncationConfig::new(1, 1, 0.05).validate_for(10).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySurvivorPool { .. }));
    }

    #[test]
    fn test_validate_for_insufficient_capacity() {
        // floor(0.15 * 10) = 1 survivor, ceil(1 / 0.15) = 7 slots < 10
        let config = TruncationConfig::new(1, 1, 0.15).with_replacement(false);
        assert_eq!(
            config.validate_for(10),
            Err(ConfigError::InsufficientCapacity {
                survivors: 1,
                capacity: 7,
                population_size: 10
            })
        );
        // with replacement the same cut is fine
        assert!(config.with_replacement(true).validate_for(10).is_ok());
    }

    #[test]
    fn test_validate_for_typical_thresholds() {
        for t in [0.1, 0.2, 0.25, 0.3, 0.5, 0.7, 0.9, 1.0] {
            let config = TruncationConfig::new(1, 1, t).with_replacement(false);
            assert!(config.validate_for(100).is_ok(), "threshold {t}");
        }
    }
}
