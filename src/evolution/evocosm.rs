//! # Evocosm
//!
//! The generational engine. Each call to [`Evocosm::run_generation`] performs
//! one cycle:
//!
//! 1. the landscape tests every organism, bracketed by listener pings
//! 2. the analyzer decides whether to continue
//! 3. the scaler rescales a working copy of the population
//! 4. the selector picks survivors from the scaled copy
//! 5. the reproducer breeds the missing organisms from the unscaled population
//! 6. the mutator mutates the children
//! 7. survivors followed by children become the next population
//!
//! The engine owns every strategy and the random number generator, and lends
//! the generator to each strategy call. Build one with
//! [`EvocosmBuilder`](super::EvocosmBuilder).

use std::thread;
use std::time::Duration;

use tracing::{info, instrument, trace, warn, Span};

use crate::{
    breeding::{Mutator, Reproducer},
    error::Result,
    evolution::{Analyzer, Landscape, Listener},
    organism::Organism,
    rng::RandomNumberGenerator,
    scaling::Scaler,
    selection::Selector,
};

/// An evolving population together with the strategies that drive it.
pub struct Evocosm<G, L, M, R, S, Sel, A, Li> {
    population: Vec<Organism<G>>,
    landscape: L,
    mutator: M,
    reproducer: R,
    scaler: S,
    selector: Sel,
    analyzer: A,
    listener: Li,
    rng: RandomNumberGenerator,
    iteration: usize,
    sleep_time: Duration,
}

impl<G, L, M, R, S, Sel, A, Li> Evocosm<G, L, M, R, S, Sel, A, Li>
where
    G: Clone,
    L: Landscape<G>,
    M: Mutator<G>,
    R: Reproducer<G>,
    S: Scaler<G>,
    Sel: Selector<G>,
    A: Analyzer<G>,
    Li: Listener<G>,
{
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        population: Vec<Organism<G>>,
        landscape: L,
        mutator: M,
        reproducer: R,
        scaler: S,
        selector: Sel,
        analyzer: A,
        listener: Li,
        rng: RandomNumberGenerator,
        sleep_time: Duration,
    ) -> Self {
        Self {
            population,
            landscape,
            mutator,
            reproducer,
            scaler,
            selector,
            analyzer,
            listener,
            rng,
            iteration: 0,
            sleep_time,
        }
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(true)` if a new population was bred and evolution should
    /// continue, `Ok(false)` once the analyzer has ended the run. In the
    /// latter case the population keeps its final fitness values and the
    /// listener has received `on_run_complete`.
    ///
    /// # Errors
    ///
    /// Any strategy error is returned unchanged. The population is only
    /// replaced after every phase has succeeded.
    #[instrument(level = "debug", skip(self), fields(iteration = tracing::field::Empty))]
    pub fn run_generation(&mut self) -> Result<bool> {
        self.iteration += 1;
        let iteration = self.iteration;
        Span::current().record("iteration", iteration);

        self.listener.on_generation_begin(&self.population, iteration);
        self.yield_now();

        let mean = self
            .landscape
            .test_population(&mut self.population, &mut self.listener);
        trace!(mean, "population tested");
        self.yield_now();

        self.listener.on_generation_end(&self.population, iteration);
        self.yield_now();

        if !self.analyzer.analyze(&self.population, iteration) {
            info!(iteration, "evolution complete");
            self.listener.on_run_complete(&self.population);
            return Ok(false);
        }

        let mut scaled = self.population.clone();
        self.scaler.scale_fitness(&mut scaled)?;
        trace!("fitness scaled");
        self.yield_now();

        let mut next = self.selector.select_survivors(&scaled)?;
        let size = self.population.len();
        if next.len() > size {
            warn!(
                survivors = next.len(),
                size, "selector returned more survivors than the population holds"
            );
        }
        trace!(survivors = next.len(), "survivors selected");
        self.yield_now();

        let mut children = self.reproducer.breed(
            &self.population,
            size.saturating_sub(next.len()),
            &mut self.rng,
        )?;
        trace!(children = children.len(), "children bred");
        self.yield_now();

        self.mutator.mutate(&mut children, &mut self.rng);
        self.yield_now();

        next.append(&mut children);

        if next.len() != size {
            warn!(
                expected = size,
                actual = next.len(),
                "population size changed between generations"
            );
        }

        self.population = next;
        Ok(true)
    }

    /// Runs generations until the analyzer ends the run.
    ///
    /// Returns the number of breeding cycles performed.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first strategy error.
    pub fn run(&mut self) -> Result<usize> {
        let mut cycles = 0;
        while self.run_generation()? {
            cycles += 1;
        }
        Ok(cycles)
    }

    fn yield_now(&self) {
        if !self.sleep_time.is_zero() {
            thread::sleep(self.sleep_time);
        }
    }
}

impl<G, L, M, R, S, Sel, A, Li> Evocosm<G, L, M, R, S, Sel, A, Li> {
    pub fn population(&self) -> &[Organism<G>] {
        &self.population
    }

    /// Gives up the engine, returning the current population.
    pub fn into_population(self) -> Vec<Organism<G>> {
        self.population
    }

    /// Number of generations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn sleep_time(&self) -> Duration {
        self.sleep_time
    }

    /// Sets the pause taken between phases. Zero disables pausing.
    pub fn set_sleep_time(&mut self, sleep_time: Duration) {
        self.sleep_time = sleep_time;
    }

    pub fn landscape(&self) -> &L {
        &self.landscape
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn listener(&self) -> &Li {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut Li {
        &mut self.listener
    }

    /// Seed of the engine's random number generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
