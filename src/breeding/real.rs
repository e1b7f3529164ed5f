//! # Real-vector strategies
//!
//! Breeding strategies for genotypes that are vectors of `f32` or `f64`.
//! Both delegate the bit-level work to [`RealGeneOps`], so no child ever
//! holds a NaN or an infinity unless a parent already did.
//!
//! ## Example
//!
//! ```rust
//! use evocosm::breeding::{Mutator, RealMutator, RealReproducer, Reproducer};
//! use evocosm::organism::Organism;
//! use evocosm::rng::RandomNumberGenerator;
//! use evocosm::error::Result;
//!
//! fn main() -> Result<()> {
//!     let mut rng = RandomNumberGenerator::from_seed(3);
//!     let population = vec![
//!         Organism { genes: vec![1.0f64, 2.0], fitness: 1.0 },
//!         Organism { genes: vec![-1.0f64, 0.5], fitness: 3.0 },
//!     ];
//!
//!     let mut children = RealReproducer::new(0.9)?.breed(&population, 5, &mut rng)?;
//!     RealMutator::new(0.1)?.mutate(&mut children, &mut rng);
//!
//!     assert_eq!(children.len(), 5);
//!     assert!(children.iter().all(|c| c.genes.iter().all(|g| g.is_finite())));
//!
//!     Ok(())
//! }
//! ```

use crate::{
    breeding::{Mutator, Reproducer},
    error::{GeneticError, Result},
    evoreal::{RealGene, RealGeneOps},
    organism::Organism,
    rng::RandomNumberGenerator,
    roulette::RouletteWheel,
};

/// Wheel spins spent looking for a distinct second parent before falling
/// back to a uniform pick among the others.
const MATE_ATTEMPTS: usize = 16;

fn check_rate(name: &str, rate: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, rate
        )))
    }
}

/// Mutates each gene independently with probability `mutation_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct RealMutator {
    mutation_rate: f64,
    ops: RealGeneOps,
}

impl RealMutator {
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] for a rate outside `[0, 1]`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        Self::with_ops(mutation_rate, RealGeneOps::default())
    }

    /// Like [`new`](Self::new), with custom region weights.
    pub fn with_ops(mutation_rate: f64, ops: RealGeneOps) -> Result<Self> {
        Ok(Self {
            mutation_rate: check_rate("Mutation rate", mutation_rate)?,
            ops,
        })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl<F: RealGene + Send + Sync> Mutator<Vec<F>> for RealMutator {
    fn mutate(&self, population: &mut [Organism<Vec<F>>], rng: &mut RandomNumberGenerator) {
        for organism in population.iter_mut() {
            for gene in organism.genes.iter_mut() {
                if rng.get_real() < self.mutation_rate {
                    *gene = self.ops.mutate(*gene, rng);
                }
            }
        }
    }
}

/// Fitness-proportional reproduction with gene-wise crossover.
///
/// Each child starts as a copy of a parent drawn from a roulette wheel
/// weighted by `max(fitness, 0)`. With probability `crossover_rate` a second,
/// different parent is drawn and every gene of the child is crossed with the
/// matching gene of that parent.
#[derive(Debug, Clone, PartialEq)]
pub struct RealReproducer {
    crossover_rate: f64,
    ops: RealGeneOps,
}

impl RealReproducer {
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] for a rate outside `[0, 1]`.
    pub fn new(crossover_rate: f64) -> Result<Self> {
        Self::with_ops(crossover_rate, RealGeneOps::default())
    }

    /// Like [`new`](Self::new), with custom region weights.
    pub fn with_ops(crossover_rate: f64, ops: RealGeneOps) -> Result<Self> {
        Ok(Self {
            crossover_rate: check_rate("Crossover rate", crossover_rate)?,
            ops,
        })
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    fn pick_mate(
        wheel: &RouletteWheel,
        first: usize,
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        for _ in 0..MATE_ATTEMPTS {
            let candidate = wheel.get_index(rng);
            if candidate != first {
                return candidate;
            }
        }

        let n = wheel.len();
        (first + 1 + rng.get_index(n - 1)) % n
    }
}

impl<F: RealGene + Send + Sync> Reproducer<Vec<F>> for RealReproducer {
    fn breed(
        &self,
        population: &[Organism<Vec<F>>],
        limit: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Organism<Vec<F>>>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let weights: Vec<f64> = population.iter().map(|o| o.fitness.max(0.0)).collect();
        let wheel = RouletteWheel::new(&weights)?;
        let can_cross = population.len() > 1;

        let mut children = Vec::with_capacity(limit);

        for _ in 0..limit {
            let first = wheel.get_index(rng);
            let mut genes = population[first].genes.clone();

            if can_cross && rng.get_real() < self.crossover_rate {
                let second = Self::pick_mate(&wheel, first, rng);
                let mate = &population[second].genes;

                if mate.len() != genes.len() {
                    return Err(GeneticError::Breeding(format!(
                        "cannot cross {} genes with {}",
                        genes.len(),
                        mate.len()
                    )));
                }

                for (gene, &other) in genes.iter_mut().zip(mate) {
                    *gene = self.ops.crossover(*gene, other, rng);
                }
            }

            children.push(Organism::new(genes));
        }

        Ok(children)
    }
}
