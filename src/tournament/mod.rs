//! q-ary tournament selection and take-over time.
//!
//! Each generation runs `n` tournaments; a tournament draws `q`
//! competitors uniformly with replacement and advances the fittest. The
//! engine follows how quickly copies of the best initial member take
//! over the population, recording when 20, 40, 60, 80 and 100 % are first
//! reached.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Bäck (1994), "Selective pressure in evolutionary algorithms: A
//!   characterization of selection mechanisms"

mod config;
mod runner;
mod types;

pub use config::{TournamentConfig, MAX_TOURNAMENT_SIZE, MIN_TOURNAMENT_SIZE};
pub use runner::{milestones_reached, tournament, tournament_generation, TournamentEngine};
pub use types::{MilestoneAverages, TakeoverOutcome, TournamentResult, MILESTONE_PERCENTS};
