//! Synthetic initial populations.

use super::types::{Member, Population};

/// Fitness profile of a synthetic initial population.
///
/// A shape both builds the population and describes it for reports.
///
/// # Examples
///
/// ```
/// use u_selection::population::PopulationShape;
///
/// let pop = PopulationShape::Constant { base: 1.0, top: 2.0 }.build(100);
/// assert_eq!(pop.len(), 100);
/// assert_eq!(pop.max_fitness(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PopulationShape {
    /// All members at `base`, except one at `top` in the middle slot.
    Constant { base: f64, top: f64 },

    /// `count - 1` members rising linearly from `lower` to `upper`, then
    /// one member at `top`.
    Linear { lower: f64, upper: f64, top: f64 },

    /// Member `i` has fitness `sqrt(i + 1)`.
    NonLinear,

    /// Members cycle through `attributes`, all at the same fitness.
    Alternating { fitness: f64, attributes: Vec<char> },
}

impl PopulationShape {
    /// Two-class drift population: alternating 'A' / 'B' at `fitness`.
    pub fn two_class(fitness: f64) -> Self {
        PopulationShape::Alternating {
            fitness,
            attributes: vec!['A', 'B'],
        }
    }

    /// Builds `count` members with this profile.
    pub fn build(&self, count: usize) -> Population {
        match self {
            PopulationShape::Constant { base, top } => (0..count)
                .map(|i| Member::new(if i == count / 2 { *top } else { *base }))
                .collect(),
            PopulationShape::Linear { lower, upper, top } => {
                if count == 0 {
                    return Population::default();
                }
                let slope = if count > 2 {
                    (upper - lower) / (count - 2) as f64
                } else {
                    0.0
                };
                let mut pop: Population = (0..count - 1)
                    .map(|i| Member::new(lower + slope * i as f64))
                    .collect();
                pop.push(Member::new(*top));
                pop
            }
            PopulationShape::NonLinear => {
                (0..count).map(|i| Member::new(((i + 1) as f64).sqrt())).collect()
            }
            PopulationShape::Alternating {
                fitness,
                attributes,
            } => {
                if attributes.is_empty() {
                    return (0..count).map(|_| Member::new(*fitness)).collect();
                }
                (0..count)
                    .map(|i| Member::with_attribute(attributes[i % attributes.len()], *fitness))
                    .collect()
            }
        }
    }

    /// One-line description of a population of `count` members.
    pub fn describe(&self, count: usize) -> String {
        match self {
            PopulationShape::Constant { base, top } => format!(
                "{} members with fitness {} and one member with fitness {}",
                count.saturating_sub(1),
                base,
                top
            ),
            PopulationShape::Linear { lower, upper, top } => format!(
                "{} members with fitness rising linearly from {} to {}, and one member with fitness {}",
                count.saturating_sub(1),
                lower,
                upper,
                top
            ),
            PopulationShape::NonLinear => {
                format!("{count} members with fitness sqrt(i) for i = 1..={count}")
            }
            PopulationShape::Alternating {
                fitness,
                attributes,
            } => {
                let tags: String = attributes.iter().collect();
                format!("{count} members with fitness {fitness}, attributes alternating over '{tags}'")
            }
        }
    }
}
