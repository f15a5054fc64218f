//! Configuration errors.
//!
//! All of these are detected before the first cycle of an experiment
//! runs. None of them are retryable.

/// Invalid experiment configuration or initial population.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("cycles must be at least 1")]
    ZeroCycles,

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("initial population must not be empty")]
    EmptyPopulation,

    #[error("member {index} has invalid fitness {fitness} (must be finite and non-negative)")]
    InvalidFitness { index: usize, fitness: f64 },

    #[error("total fitness of the population must be positive")]
    ZeroTotalFitness,

    #[error("drift tracking needs at least 2 attribute classes, found {found}")]
    InsufficientAttributes { found: usize },

    #[error("threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("threshold {threshold} leaves no survivors in a population of {population_size}")]
    EmptySurvivorPool {
        threshold: f64,
        population_size: usize,
    },

    #[error(
        "{survivors} survivors with {capacity} offspring slots each cannot fill a population of {population_size}"
    )]
    InsufficientCapacity {
        survivors: usize,
        capacity: usize,
        population_size: usize,
    },

    #[error("tournament size q must be in [2, 5], got {0}")]
    InvalidTournamentSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            ConfigError::InvalidThreshold(1.5).to_string(),
            "threshold must be in (0, 1], got 1.5"
        );
        assert_eq!(
            ConfigError::InvalidTournamentSize(1).to_string(),
            "tournament size q must be in [2, 5], got 1"
        );
        let msg = ConfigError::InsufficientCapacity {
            survivors: 1,
            capacity: 7,
            population_size: 10,
        }
        .to_string();
        assert!(msg.contains("1 survivors"));
        assert!(msg.contains("population of 10"));
    }
}
