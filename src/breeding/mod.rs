//! # Breeding
//!
//! The two strategies that produce the next generation's new material:
//! a [`Reproducer`] creates children from the evaluated population and a
//! [`Mutator`] perturbs those children before they join the survivors.
//!
//! Both receive the engine's [`RandomNumberGenerator`] for the duration of
//! the call; neither keeps random state of its own.
pub mod real;

use std::fmt::Debug;

use crate::{error::Result, organism::Organism, rng::RandomNumberGenerator};

pub use real::{RealMutator, RealReproducer};

/// Trait for mutation strategies.
pub trait Mutator<G>: Debug + Send + Sync {
    /// Mutates `population` in place.
    ///
    /// The engine only ever passes freshly bred children, never survivors.
    fn mutate(&self, population: &mut [Organism<G>], rng: &mut RandomNumberGenerator);
}

/// Trait for reproduction strategies.
pub trait Reproducer<G>: Debug + Send + Sync {
    /// Breeds exactly `limit` children from `population`.
    ///
    /// `population` carries the fitness assigned by the landscape, before
    /// any scaling. Children start with zero fitness.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot be bred from, for example
    /// because it is empty while `limit` is not zero.
    fn breed(
        &self,
        population: &[Organism<G>],
        limit: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Organism<G>>>;
}

/// Leaves every organism unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullMutator;

impl<G> Mutator<G> for NullMutator {
    fn mutate(&self, _population: &mut [Organism<G>], _rng: &mut RandomNumberGenerator) {}
}
