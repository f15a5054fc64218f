//! Population model shared by every selection engine.
//!
//! - [`Member`]: one individual (optional attribute + fitness). Equality
//!   is fitness equality.
//! - [`FitnessKey`]: exact fitness bucket used for diversity counting.
//! - [`Population`]: one generation, an ordered sequence of members.
//! - [`PopulationShape`]: synthetic initial populations.

mod shape;
mod types;

pub use shape::PopulationShape;
pub use types::{FitnessKey, Member, Population};
