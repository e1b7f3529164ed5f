//! # SigmaScaler
//!
//! Forrest and Tanese sigma scaling: fitness is expressed relative to the
//! population mean and divided by twice the standard deviation, which keeps
//! selection pressure roughly constant as the population converges.

use crate::error::Result;
use crate::organism::Organism;
use crate::scaling::Scaler;
use crate::stats::FitnessStats;

/// Lowest fitness sigma scaling assigns; everyone keeps a chance to breed.
pub const SIGMA_FLOOR: f64 = 0.1;

/// Sigma scaler.
///
/// A population with zero spread gets a fitness of 1.0 everywhere. Otherwise
/// each organism gets `(1 + f / mean) / (2 * sigma)`, floored at
/// [`SIGMA_FLOOR`]. A result that is not a number is floored as well.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SigmaScaler;

impl SigmaScaler {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Clone> Scaler<G> for SigmaScaler {
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()> {
        let stats = FitnessStats::new(population)?;
        let sigma2 = 2.0 * stats.sigma();

        if sigma2 == 0.0 {
            population.iter_mut().for_each(|o| o.fitness = 1.0);
            return Ok(());
        }

        let mean = stats.mean();
        for organism in population.iter_mut() {
            let scaled = (1.0 + organism.fitness / mean) / sigma2;
            organism.fitness = if scaled.is_nan() || scaled < SIGMA_FLOOR {
                SIGMA_FLOOR
            } else {
                scaled
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(fitness: &[f64]) -> Vec<Organism<()>> {
        fitness
            .iter()
            .map(|&fitness| Organism { genes: (), fitness })
            .collect()
    }

    #[test]
    fn test_zero_variance() {
        let mut pop = population(&[3.0, 3.0, 3.0, 3.0]);

        SigmaScaler::new().scale_fitness(&mut pop).unwrap();

        assert!(pop.iter().all(|o| o.fitness == 1.0));
    }

    #[test]
    fn test_single_organism() {
        let mut pop = population(&[42.0]);

        SigmaScaler::new().scale_fitness(&mut pop).unwrap();

        assert_eq!(pop[0].fitness, 1.0);
    }

    #[test]
    fn test_sigma_formula() {
        // mean 3, sigma 2
        let mut pop = population(&[1.0, 5.0, 3.0]);

        SigmaScaler::new().scale_fitness(&mut pop).unwrap();

        assert!((pop[0].fitness - (1.0 + 1.0 / 3.0) / 4.0).abs() < 1e-12);
        assert!((pop[1].fitness - (1.0 + 5.0 / 3.0) / 4.0).abs() < 1e-12);
        assert!((pop[2].fitness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_floor() {
        // large spread pushes small ratios under the floor
        let mut pop = population(&[0.0, 0.0, 0.0, 1000.0]);

        SigmaScaler::new().scale_fitness(&mut pop).unwrap();

        assert_eq!(pop[0].fitness, SIGMA_FLOOR);
        assert!(pop.iter().all(|o| o.fitness >= SIGMA_FLOOR));
    }

    #[test]
    fn test_zero_mean_floors_nan() {
        let mut pop = population(&[-1.0, 0.0, 1.0]);

        SigmaScaler::new().scale_fitness(&mut pop).unwrap();

        assert_eq!(pop[0].fitness, SIGMA_FLOOR);
        assert_eq!(pop[1].fitness, SIGMA_FLOOR);
    }

    #[test]
    fn test_empty_population() {
        let mut pop = population(&[]);
        assert!(SigmaScaler::new().scale_fitness(&mut pop).is_err());
    }
}
