//! # Organism
//!
//! An [`Organism`] is one candidate solution: a genotype chosen by the caller
//! and the fitness value most recently assigned to it by a landscape.
//!
//! ## Example
//!
//! ```rust
//! use evocosm::organism::Organism;
//!
//! let mut organism = Organism::new(vec![0.5_f64, -1.25]);
//! assert_eq!(organism.fitness, 0.0);
//!
//! organism.fitness = 3.0;
//! organism.reset();
//! assert_eq!(organism.fitness, 0.0);
//! assert_eq!(organism.genes, vec![0.5, -1.25]);
//! ```
//!
//! Organisms are plain values. Survivors and children are clones, so the
//! population of one generation never aliases the next.

/// A candidate solution: genes plus a fitness score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Organism<G> {
    /// The genetic material evaluated by a landscape.
    pub genes: G,
    /// Fitness assigned by the landscape, possibly rescaled by a scaler.
    pub fitness: f64,
}

impl<G> Organism<G> {
    /// Creates an organism with the given genes and zero fitness.
    pub fn new(genes: G) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// Resets the fitness to zero ahead of re-evaluation.
    pub fn reset(&mut self) {
        self.fitness = 0.0;
    }
}

impl<G> From<G> for Organism<G> {
    fn from(genes: G) -> Self {
        Self::new(genes)
    }
}

/// Resets the fitness of every organism in a population.
pub fn reset_population<G>(population: &mut [Organism<G>]) {
    population.iter_mut().for_each(Organism::reset);
}
