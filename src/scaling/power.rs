//! Polynomial rescalings that need no population statistics.

use crate::error::Result;
use crate::organism::Organism;
use crate::scaling::Scaler;

/// Scales fitness to `(a * f + b) ^ power`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialScaler {
    a: f64,
    b: f64,
    power: f64,
}

impl ExponentialScaler {
    pub fn new(a: f64, b: f64, power: f64) -> Self {
        Self { a, b, power }
    }
}

impl Default for ExponentialScaler {
    /// `(f + 1) ^ 2`
    fn default() -> Self {
        Self::new(1.0, 1.0, 2.0)
    }
}

impl<G> Scaler<G> for ExponentialScaler {
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()> {
        for organism in population.iter_mut() {
            organism.fitness = (self.a * organism.fitness + self.b).powf(self.power);
        }
        Ok(())
    }
}

/// Scales fitness to `a * f^2 + b * f + c`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticScaler {
    a: f64,
    b: f64,
    c: f64,
}

impl QuadraticScaler {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl<G> Scaler<G> for QuadraticScaler {
    fn scale_fitness(&self, population: &mut [Organism<G>]) -> Result<()> {
        for organism in population.iter_mut() {
            let f = organism.fitness;
            organism.fitness = self.a * f * f + self.b * f + self.c;
        }
        Ok(())
    }
}
