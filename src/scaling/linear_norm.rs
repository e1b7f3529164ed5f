//! # LinearNormScaler
//!
//! Goldberg's linear normalization. Fitness is mapped through `a * f + b`
//! so that the population mean is unchanged and the best organism ends up
//! with `fitness_multiple` times the mean. When that mapping would push the
//! worst organism below zero, the "extreme" mapping is used instead, which
//! pins the minimum at zero and keeps the mean fixed.

use crate::error::{GeneticError, Result};
use crate::organism::Organism;
use crate::scaling::Scaler;
use crate::stats::FitnessStats;

/// Linear normalization scaler.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearNormScaler {
    fitness_multiple: f64,
}

impl LinearNormScaler {
    /// Creates a scaler targeting `best = fitness_multiple * mean`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] unless `fitness_multiple` is
    /// finite and greater than 1.
    pub fn new(fitness_multiple: f64) -> Result<Self> {
        if !fitness_multiple.is_finite() || fitness_multiple <= 1.0 {
            return Err(GeneticError::Configuration(format!(
                "Fitness multiple must be finite and greater than 1, got {}",
                fitness_multiple
            )));
        }

        Ok(Self { fitness_multiple })
    }

    pub fn fitness_multiple(&self) -> f64 {
        self.fitness_multiple
    }
}

impl Default for LinearNormScaler {
    fn default() -> Self {
        Self {
            fitness_multiple: 2.0,
        }
    }
}

impl<G: Clone> Scaler<G> for LinearNormScaler {
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()> {
        let stats = FitnessStats::new(population)?;
        let (min, max, mean) = (stats.min(), stats.max(), stats.mean());
        let multiple = self.fitness_multiple;

        let (slope, intercept) = if min > (multiple * mean - max) / (multiple - 1.0) {
            let delta = max - mean;
            if delta == 0.0 {
                return Ok(());
            }
            (
                (multiple - 1.0) * mean / delta,
                mean * (max - multiple * mean) / delta,
            )
        } else {
            let delta = mean - min;
            if delta == 0.0 {
                return Ok(());
            }
            (mean / delta, -min * mean / delta)
        };

        for organism in population.iter_mut() {
            organism.fitness = slope * organism.fitness + intercept;
        }

        Ok(())
    }
}
