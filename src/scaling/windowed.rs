use crate::error::Result;
use crate::organism::Organism;
use crate::scaling::Scaler;
use crate::stats::FitnessStats;

/// Windowed scaler: every organism receives the population minimum.
///
/// This flattens the distribution completely, so a fitness-proportional
/// reproducer samples parents uniformly afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowedScaler;

impl WindowedScaler {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Clone> Scaler<G> for WindowedScaler {
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()> {
        let min = FitnessStats::new(population)?.min();
        population.iter_mut().for_each(|o| o.fitness = min);
        Ok(())
    }
}
