//! Truncation ("cut") selection.
//!
//! Every generation the population is sorted by fitness, the lowest
//! `⌈(1 − T)·n⌉` members are discarded, and the survivors breed the next
//! generation either with replacement (uniform draws, no cap) or without
//! replacement (uniform draws, at most `⌈1/T⌉` offspring per survivor).
//!
//! The engine measures how much genetic material is lost: the share of
//! duplicate fitness values in the final generation, and how often each
//! initial member is still represented at the end of a cycle.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive models for the
//!   breeder genetic algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

mod config;
mod runner;
mod types;

pub use config::TruncationConfig;
pub use runner::{
    cut_index, select_capacity_bounded, select_with_replacement, survivor_capacity, survivors,
    TruncationEngine,
};
pub use types::{SurvivorRecord, TruncationResult};
