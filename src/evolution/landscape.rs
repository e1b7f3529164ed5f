//! # Landscape
//!
//! A landscape assigns fitness. Implementors only provide
//! [`Landscape::test`]; the provided [`Landscape::test_population`] walks the
//! population, stores each score and pings the listener around every test.
//!
//! ```rust
//! use evocosm::evolution::{FunctionLandscape, Landscape, NullListener};
//! use evocosm::organism::Organism;
//!
//! let landscape = FunctionLandscape::new(|x: &[f64]| -x.iter().map(|v| v * v).sum::<f64>());
//! let mut population = vec![Organism::new(vec![1.0, 2.0]), Organism::new(vec![0.0, 0.0])];
//!
//! let mean = landscape.test_population(&mut population, &mut NullListener);
//!
//! assert_eq!(population[0].fitness, -5.0);
//! assert_eq!(population[1].fitness, 0.0);
//! assert_eq!(mean, -2.5);
//! ```

use std::fmt;

use rayon::prelude::*;

use crate::evolution::Listener;
use crate::organism::Organism;

/// Trait for fitness landscapes.
///
/// `Sync` is required so a landscape can be shared across rayon workers by
/// [`ParallelLandscape`].
pub trait Landscape<G>: Send + Sync {
    /// Returns the fitness of `organism`. Higher is better.
    fn test(&self, organism: &Organism<G>) -> f64;

    /// Evaluates every organism in order, storing its fitness.
    ///
    /// Returns the mean fitness, or 0.0 for an empty population.
    fn test_population(
        &self,
        population: &mut [Organism<G>],
        listener: &mut dyn Listener<G>,
    ) -> f64 {
        if population.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;

        for organism in population.iter_mut() {
            listener.on_fitness_test_begin(organism);
            organism.fitness = self.test(organism);
            listener.on_fitness_test_end(organism);
            total += organism.fitness;
        }

        total / population.len() as f64
    }
}

/// Evaluates large populations on the rayon thread pool.
///
/// Populations smaller than `parallel_threshold` fall back to the wrapped
/// landscape's own `test_population`. Above it, every score is computed in
/// parallel first, then written back and announced to the listener in
/// population order, so listeners observe the same sequence either way.
#[derive(Debug, Clone)]
pub struct ParallelLandscape<L> {
    inner: L,
    parallel_threshold: usize,
}

impl<L> ParallelLandscape<L> {
    pub fn new(inner: L, parallel_threshold: usize) -> Self {
        Self {
            inner,
            parallel_threshold,
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl<G, L> Landscape<G> for ParallelLandscape<L>
where
    G: Send + Sync,
    L: Landscape<G>,
{
    fn test(&self, organism: &Organism<G>) -> f64 {
        self.inner.test(organism)
    }

    fn test_population(
        &self,
        population: &mut [Organism<G>],
        listener: &mut dyn Listener<G>,
    ) -> f64 {
        if population.is_empty() || population.len() < self.parallel_threshold {
            return self.inner.test_population(population, listener);
        }

        let scores: Vec<f64> = population
            .par_iter()
            .map(|organism| self.inner.test(organism))
            .collect();

        let mut total = 0.0;

        for (organism, score) in population.iter_mut().zip(scores) {
            listener.on_fitness_test_begin(organism);
            organism.fitness = score;
            listener.on_fitness_test_end(organism);
            total += score;
        }

        total / population.len() as f64
    }
}

/// A landscape over real vectors whose fitness is a plain function of the
/// genes.
#[derive(Clone)]
pub struct FunctionLandscape<F> {
    function: F,
}

impl<F> FunctionLandscape<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> fmt::Debug for FunctionLandscape<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionLandscape").finish_non_exhaustive()
    }
}

impl<F> Landscape<Vec<f64>> for FunctionLandscape<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn test(&self, organism: &Organism<Vec<f64>>) -> f64 {
        (self.function)(&organism.genes)
    }
}
