//! # Listener
//!
//! Observers of a run. The engine pings its listener at the start and end
//! of each generation, around every fitness test, and once when the run is
//! complete. `report` and `report_error` are never called by the engine;
//! strategies and applications use them to route messages through the same
//! sink.

use std::fmt::Debug;

use tracing::{debug, error, info, trace, warn};

use crate::organism::Organism;
use crate::stats::FitnessStats;

/// Trait for run observers. Every method defaults to a no-op.
pub trait Listener<G> {
    fn on_generation_begin(&mut self, _population: &[Organism<G>], _iteration: usize) {}

    /// Called after the landscape has assigned fitness, before analysis.
    fn on_generation_end(&mut self, _population: &[Organism<G>], _iteration: usize) {}

    fn on_fitness_test_begin(&mut self, _organism: &Organism<G>) {}

    /// Called with the fitness already assigned.
    fn on_fitness_test_end(&mut self, _organism: &Organism<G>) {}

    fn report(&mut self, _text: &str) {}

    fn report_error(&mut self, _text: &str) {}

    /// Called once, with the final evaluated population.
    fn on_run_complete(&mut self, _population: &[Organism<G>]) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullListener;

impl<G> Listener<G> for NullListener {}

/// Forwards events to `tracing`.
///
/// Generation summaries and reports go out at `info`, errors at `error`,
/// per-organism fitness tests at `trace`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TracingListener;

impl TracingListener {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Clone + Debug> Listener<G> for TracingListener {
    fn on_generation_begin(&mut self, population: &[Organism<G>], iteration: usize) {
        debug!(iteration, size = population.len(), "generation begin");
    }

    fn on_generation_end(&mut self, population: &[Organism<G>], iteration: usize) {
        match FitnessStats::new(population) {
            Ok(stats) => info!(
                iteration,
                best = stats.max(),
                mean = stats.mean(),
                sigma = stats.sigma(),
                genes = ?stats.best().genes,
                "generation end"
            ),
            Err(e) => warn!(iteration, error = %e, "generation end"),
        }
    }

    fn on_fitness_test_begin(&mut self, organism: &Organism<G>) {
        trace!(genes = ?organism.genes, "fitness test begin");
    }

    fn on_fitness_test_end(&mut self, organism: &Organism<G>) {
        trace!(fitness = organism.fitness, "fitness test end");
    }

    fn report(&mut self, text: &str) {
        info!("{}", text);
    }

    fn report_error(&mut self, text: &str) {
        error!("{}", text);
    }

    fn on_run_complete(&mut self, population: &[Organism<G>]) {
        match FitnessStats::new(population) {
            Ok(stats) => info!(
                best = stats.max(),
                genes = ?stats.best().genes,
                "run complete"
            ),
            Err(_) => info!("run complete with an empty population"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Listener<u8> for Recorder {
        fn report(&mut self, text: &str) {
            self.events.push(format!("report: {}", text));
        }
    }

    #[test]
    fn test_defaults_are_noops() {
        let mut listener = Recorder::default();
        let population = vec![Organism::new(1u8)];

        listener.on_generation_begin(&population, 1);
        listener.on_fitness_test_begin(&population[0]);
        listener.on_run_complete(&population);
        listener.report("hello");

        assert_eq!(listener.events, vec!["report: hello".to_string()]);
    }

    #[test]
    fn test_tracing_listener_handles_empty_population() {
        let mut listener = TracingListener::new();
        let empty: Vec<Organism<u8>> = Vec::new();

        listener.on_generation_end(&empty, 1);
        listener.on_run_complete(&empty);
        Listener::<u8>::report_error(&mut listener, "oops");
    }
}
