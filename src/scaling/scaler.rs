use std::fmt::Debug;

use crate::error::Result;
use crate::organism::Organism;

/// Trait for fitness scaling strategies.
///
/// A scaler rewrites the fitness of every organism in place after the
/// landscape has evaluated the population and before survivors are chosen.
/// Scaling changes how strongly the selector favors the leaders without
/// changing their rank order (windowed scaling excepted, which flattens it).
///
/// # Examples
///
/// ```
/// use evocosm::organism::Organism;
/// use evocosm::scaling::{ExponentialScaler, Scaler};
/// use evocosm::error::Result;
///
/// fn main() -> Result<()> {
///     let mut population = vec![
///         Organism { genes: 'a', fitness: 1.0 },
///         Organism { genes: 'b', fitness: 2.0 },
///     ];
///
///     // (1 * f + 1) ^ 2
///     ExponentialScaler::default().scale_fitness(&mut population)?;
///
///     assert_eq!(population[0].fitness, 4.0);
///     assert_eq!(population[1].fitness, 9.0);
///
///     Ok(())
/// }
/// ```
pub trait Scaler<G>: Debug + Send + Sync {
    /// Rescales the fitness of `population` in place.
    ///
    /// # Errors
    ///
    /// Scalers that consult [`FitnessStats`](crate::stats::FitnessStats)
    /// return [`GeneticError::EmptyPopulation`](crate::error::GeneticError::EmptyPopulation)
    /// for an empty population.
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()>;
}

/// Leaves fitness untouched.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullScaler;

impl NullScaler {
    pub fn new() -> Self {
        Self
    }
}

impl<G> Scaler<G> for NullScaler {
    fn scale_fitness(&self, _population: &mut [Organism<G>]) -> Result<()> {
        Ok(())
    }
}
