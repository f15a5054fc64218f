//! Tournament experiment configuration.

use crate::cycle::check_counts;
use crate::error::ConfigError;

/// Smallest tournament size accepted. `q = 1` is plain random sampling.
pub const MIN_TOURNAMENT_SIZE: usize = 2;

/// Largest tournament size accepted.
pub const MAX_TOURNAMENT_SIZE: usize = 5;

/// Configuration of a q-tournament take-over experiment.
///
/// # Examples
///
/// ```
/// use u_selection::tournament::TournamentConfig;
///
/// let config = TournamentConfig::new(5, 1000, 30).with_seed(3);
/// assert!(config.validate().is_ok());
/// assert!(TournamentConfig::new(1, 1000, 30).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TournamentConfig {
    /// Competitors per tournament, in `[2, 5]`.
    pub q: usize,

    /// Number of independent selection cycles.
    pub cycles: usize,

    /// Generations evolved in every cycle.
    pub generations: usize,

    /// Whether to spread cycles over the rayon pool.
    pub parallel: bool,

    /// Experiment seed. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            q: 2,
            cycles: 1000,
            generations: 30,
            parallel: true,
            seed: None,
        }
    }
}

impl TournamentConfig {
    pub fn new(q: usize, cycles: usize, generations: usize) -> Self {
        Self {
            q,
            cycles,
            generations,
            ..Self::default()
        }
    }

    pub fn with_q(mut self, q: usize) -> Self {
        self.q = q;
        self
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
        if !(MIN_TOURNAMENT_SIZE..=MAX_TOURNAMENT_SIZE).contains(&self.q) {
            return Err(ConfigError::InvalidTournamentSize(self.q));
        }
        check_counts(self.cycles, self.generations)
    }
}
