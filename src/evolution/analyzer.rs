use std::fmt::Debug;

use tracing::{debug, warn};

use crate::error::{GeneticError, Result};
use crate::evolution::options::{EvolutionOptions, IterationLimit};
use crate::organism::Organism;
use crate::stats::FitnessStats;

/// Default number of generations the best genes may stay unchanged before a
/// [`StagnationAnalyzer`] stops the run.
pub const DEFAULT_STALL_LIMIT: usize = 20;

/// Trait for termination policies.
///
/// The engine consults its analyzer once per generation, after fitness has
/// been assigned and before any breeding. Returning `false` ends the run.
pub trait Analyzer<G>: Debug + Send + Sync {
    /// `iteration` is the 1-based number of the generation just evaluated.
    fn analyze(&mut self, population: &[Organism<G>], iteration: usize) -> bool;
}

/// Stops once the iteration limit is exceeded.
///
/// With `Bounded(n)` the analyzer returns `true` for iterations `1..=n`, so
/// exactly `n` breeding cycles run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaxIterationsAnalyzer {
    limit: IterationLimit,
}

impl MaxIterationsAnalyzer {
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] when `max_iterations` is zero;
    /// use [`unbounded`](Self::unbounded) for an open-ended run.
    pub fn new(max_iterations: usize) -> Result<Self> {
        Self::with_limit(IterationLimit::Bounded(max_iterations))
    }

    pub fn with_limit(limit: IterationLimit) -> Result<Self> {
        limit.validate()?;
        Ok(Self { limit })
    }

    pub fn unbounded() -> Self {
        Self {
            limit: IterationLimit::Unbounded,
        }
    }

    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Self::with_limit(options.get_iteration_limit())
    }

    pub fn limit(&self) -> IterationLimit {
        self.limit
    }
}

impl<G> Analyzer<G> for MaxIterationsAnalyzer {
    fn analyze(&mut self, _population: &[Organism<G>], iteration: usize) -> bool {
        self.limit.allows(iteration)
    }
}

/// Stops when the best genes have not changed for `stall_limit` consecutive
/// generations, or when the iteration limit is exceeded, whichever happens
/// first. An empty population also stops the run.
#[derive(Debug, Clone)]
pub struct StagnationAnalyzer<G> {
    limit: IterationLimit,
    stall_limit: usize,
    stall_count: usize,
    previous_best: Option<G>,
}

impl<G> StagnationAnalyzer<G> {
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] for a zero stall limit or a
    /// `Bounded(0)` iteration limit.
    pub fn new(limit: IterationLimit, stall_limit: usize) -> Result<Self> {
        limit.validate()?;

        if stall_limit == 0 {
            return Err(GeneticError::Configuration(
                "Stall limit cannot be zero".to_string(),
            ));
        }

        Ok(Self {
            limit,
            stall_limit,
            stall_count: 0,
            previous_best: None,
        })
    }

    /// Uses the options' iteration limit and [`DEFAULT_STALL_LIMIT`].
    pub fn from_options(options: &EvolutionOptions) -> Result<Self> {
        Self::new(options.get_iteration_limit(), DEFAULT_STALL_LIMIT)
    }

    /// Consecutive generations the best genes have been unchanged.
    pub fn stall_count(&self) -> usize {
        self.stall_count
    }

    pub fn stall_limit(&self) -> usize {
        self.stall_limit
    }
}

impl<G> Analyzer<G> for StagnationAnalyzer<G>
where
    G: Clone + PartialEq + Debug + Send + Sync,
{
    fn analyze(&mut self, population: &[Organism<G>], iteration: usize) -> bool {
        let best = match FitnessStats::new(population) {
            Ok(stats) => stats.into_best().genes,
            Err(e) => {
                warn!(iteration, error = %e, "cannot analyze population");
                return false;
            }
        };

        if self.previous_best.as_ref() == Some(&best) {
            self.stall_count += 1;
        } else {
            self.stall_count = 0;
        }
        self.previous_best = Some(best);

        if self.stall_count >= self.stall_limit {
            debug!(iteration, stall_count = self.stall_count, "population stagnated");
            return false;
        }

        self.limit.allows(iteration)
    }
}
