//! # FitnessStats
//!
//! A snapshot of the fitness distribution of a population: extremes, mean,
//! sample variance, standard deviation, and clones of the best and worst
//! organisms. Several scalers and selectors consult it, and listeners use it
//! for reporting.
//!
//! ```rust
//! use evocosm::organism::Organism;
//! use evocosm::stats::FitnessStats;
//!
//! let population: Vec<Organism<char>> = ['a', 'b', 'c']
//!     .into_iter()
//!     .zip([1.0, 5.0, 3.0])
//!     .map(|(genes, fitness)| Organism { genes, fitness })
//!     .collect();
//!
//! let stats = FitnessStats::new(&population).unwrap();
//! assert_eq!(stats.min(), 1.0);
//! assert_eq!(stats.max(), 5.0);
//! assert_eq!(stats.mean(), 3.0);
//! assert_eq!(stats.best().genes, 'b');
//! assert_eq!(stats.worst().genes, 'a');
//! ```
//!
//! The snapshot owns its copies, so it stays valid after the population it
//! was computed from is replaced. It does not track later fitness changes.

use crate::error::{GeneticError, OptionExt, Result};
use crate::organism::Organism;

/// Fitness statistics for one population at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessStats<G> {
    min: f64,
    max: f64,
    mean: f64,
    variance: f64,
    sigma: f64,
    best: Organism<G>,
    worst: Organism<G>,
}

impl<G: Clone> FitnessStats<G> {
    /// Computes statistics for a non-empty population.
    ///
    /// Ties for best or worst resolve to the first organism in population
    /// order. A population of one has zero variance.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] for an empty population.
    pub fn new(population: &[Organism<G>]) -> Result<Self> {
        let first = population
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let mut best_index = 0;
        let mut worst_index = 0;
        let mut max = first.fitness;
        let mut min = first.fitness;
        let mut sum = 0.0;

        for (index, organism) in population.iter().enumerate() {
            if organism.fitness > max {
                max = organism.fitness;
                best_index = index;
            }

            if organism.fitness < min {
                min = organism.fitness;
                worst_index = index;
            }

            sum += organism.fitness;
        }

        let n = population.len() as f64;
        let mean = sum / n;

        let variance = if population.len() > 1 {
            population
                .iter()
                .map(|o| (o.fitness - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };

        Ok(Self {
            min,
            max,
            mean,
            variance,
            sigma: variance.sqrt(),
            best: population[best_index].clone(),
            worst: population[worst_index].clone(),
        })
    }
}

impl<G> FitnessStats<G> {
    /// Lowest fitness in the population.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Highest fitness in the population.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Arithmetic mean fitness.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample variance (n - 1 divisor).
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation, the square root of [`variance`](Self::variance).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// A copy of the organism with the highest fitness.
    pub fn best(&self) -> &Organism<G> {
        &self.best
    }

    /// A copy of the organism with the lowest fitness.
    pub fn worst(&self) -> &Organism<G> {
        &self.worst
    }

    /// Consumes the snapshot, returning its copy of the best organism.
    pub fn into_best(self) -> Organism<G> {
        self.best
    }
}
