//! Members and populations.

use crate::error::ConfigError;
use rand::Rng;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Exact bucketing key for a fitness value.
///
/// Two fitness values share a key iff they have the same bit pattern,
/// with `-0.0` folded onto `0.0`. Clones carry their fitness bit-for-bit,
/// so every copy of an initial member stays in its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessKey(u64);

impl FitnessKey {
    /// Key of a fitness value.
    pub fn of(fitness: f64) -> Self {
        let fitness = if fitness == 0.0 { 0.0 } else { fitness };
        Self(fitness.to_bits())
    }

    /// The fitness value this key stands for.
    pub fn fitness(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// One individual: an optional categorical attribute and a fitness.
///
/// Equality and hashing look at the fitness only. Two members with
/// different attributes but the same fitness compare equal; diversity
/// and survivor accounting rely on that.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    attribute: Option<char>,
    fitness: f64,
}

impl Member {
    /// Member without an attribute.
    pub fn new(fitness: f64) -> Self {
        Self {
            attribute: None,
            fitness,
        }
    }

    /// Member tagged with `attribute`.
    pub fn with_attribute(attribute: char, fitness: f64) -> Self {
        Self {
            attribute: Some(attribute),
            fitness,
        }
    }

    pub fn attribute(&self) -> Option<char> {
        self.attribute
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn key(&self) -> FitnessKey {
        FitnessKey::of(self.fitness)
    }

    /// Copy carrying the fitness only.
    pub fn without_attribute(&self) -> Self {
        Self::new(self.fitness)
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Member {}

impl Hash for Member {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// One generation: an ordered sequence of members.
///
/// Engines never edit a generation in place across a generation
/// boundary; each step builds a fresh `Population`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    members: Vec<Member>,
}

impl Population {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    /// Uniform random permutation in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        crate::random::shuffle(&mut self.members, rng);
    }

    /// Stable ascending sort by fitness.
    pub fn sort_by_fitness(&mut self) {
        self.members.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
    }

    pub fn total_fitness(&self) -> f64 {
        self.members.iter().map(|m| m.fitness).sum()
    }

    /// Highest fitness, or `None` for an empty population.
    pub fn max_fitness(&self) -> Option<f64> {
        self.members
            .iter()
            .map(|m| m.fitness)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Number of members whose fitness falls in `key`'s bucket.
    pub fn count_fitness(&self, key: FitnessKey) -> usize {
        self.members.iter().filter(|m| m.key() == key).count()
    }

    /// Distinct fitness buckets present.
    pub fn fitness_keys(&self) -> HashSet<FitnessKey> {
        self.members.iter().map(Member::key).collect()
    }

    pub fn distinct_fitness_count(&self) -> usize {
        self.fitness_keys().len()
    }

    /// Distinct attributes present, sorted. Members without an attribute
    /// are ignored.
    pub fn attribute_classes(&self) -> Vec<char> {
        let mut classes: Vec<char> = self.members.iter().filter_map(|m| m.attribute).collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    pub fn count_attribute(&self, attribute: char) -> usize {
        self.members
            .iter()
            .filter(|m| m.attribute == Some(attribute))
            .count()
    }

    /// Checks the population is non-empty and every fitness is finite
    /// and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.members.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }
        for (index, m) in self.members.iter().enumerate() {
            if !m.fitness.is_finite() || m.fitness < 0.0 {
                return Err(ConfigError::InvalidFitness {
                    index,
                    fitness: m.fitness,
                });
            }
        }
        Ok(())
    }
}

impl Deref for Population {
    type Target = [Member];

    fn deref(&self) -> &[Member] {
        &self.members
    }
}

impl From<Vec<Member>> for Population {
    fn from(members: Vec<Member>) -> Self {
        Self::new(members)
    }
}

impl FromIterator<Member> for Population {
    fn from_iter<T: IntoIterator<Item = Member>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
