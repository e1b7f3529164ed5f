//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct collects the tunable parameters of a run: the
//! population size, how many generations may be bred, the breeding rates, the
//! scaling and survival parameters, the generator seed, the cooperative sleep
//! between phases, and the population size at which fitness evaluation goes
//! parallel.
//!
//! ## Example
//!
//! ```rust
//! use evocosm::evolution::options::{EvolutionOptions, IterationLimit};
//!
//! // Defaults
//! let options = EvolutionOptions::default();
//! assert_eq!(options.get_iteration_limit(), IterationLimit::Bounded(100));
//!
//! // Fluent builder, validated on build
//! let options = EvolutionOptions::builder()
//!     .population_size(250)
//!     .max_iterations(500)
//!     .mutation_rate(0.1)
//!     .seed(1066)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.get_population_size(), 250);
//!
//! // Zero population is rejected
//! assert!(EvolutionOptions::builder().population_size(0).build().is_err());
//! ```
//!
//! With the `serde` feature enabled the options can be loaded from any
//! serde format; call [`EvolutionOptions::validate`] after deserializing.

use std::time::Duration;

use crate::error::{GeneticError, Result};

/// How many breeding cycles a run may perform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationLimit {
    /// Stop after this many breeding cycles. Zero is not a valid limit.
    Bounded(usize),
    /// Run until some other analyzer says otherwise.
    Unbounded,
}

impl IterationLimit {
    /// Whether the generation numbered `iteration` (1-based) may breed.
    pub fn allows(&self, iteration: usize) -> bool {
        match *self {
            IterationLimit::Bounded(max) => iteration <= max,
            IterationLimit::Unbounded => true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            IterationLimit::Bounded(0) => Err(GeneticError::Configuration(
                "Iteration limit cannot be zero; use IterationLimit::Unbounded for an open-ended run"
                    .to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for IterationLimit {
    fn default() -> Self {
        IterationLimit::Bounded(100)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    iteration_limit: IterationLimit,
    mutation_rate: f64,
    crossover_rate: f64,
    /// Elitism factor: share of the best fitness a survivor must exceed
    survival_factor: f64,
    /// Linear normalization target, best = multiple * mean
    scaling_multiple: f64,
    seed: Option<u64>,
    sleep_time: Duration,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_iteration_limit(&self) -> IterationLimit {
        self.iteration_limit
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_survival_factor(&self) -> f64 {
        self.survival_factor
    }

    pub fn get_scaling_multiple(&self) -> f64 {
        self.scaling_multiple
    }

    /// The generator seed, or `None` to seed from system entropy.
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_sleep_time(&self) -> Duration {
        self.sleep_time
    }

    /// Returns the minimum number of organisms to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_iteration_limit(&mut self, iteration_limit: IterationLimit) {
        self.iteration_limit = iteration_limit;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_sleep_time(&mut self, sleep_time: Duration) {
        self.sleep_time = sleep_time;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if:
    /// - the population size is zero
    /// - the iteration limit is `Bounded(0)`
    /// - a rate or the survival factor lies outside `[0, 1]`
    /// - the scaling multiple is not a finite value greater than 1
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        self.iteration_limit.validate()?;

        for (name, value) in [
            ("Mutation rate", self.mutation_rate),
            ("Crossover rate", self.crossover_rate),
            ("Survival factor", self.survival_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.scaling_multiple.is_finite() || self.scaling_multiple <= 1.0 {
            return Err(GeneticError::Configuration(format!(
                "Scaling multiple must be finite and greater than 1, got {}",
                self.scaling_multiple
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            iteration_limit: IterationLimit::default(),
            mutation_rate: 0.05,
            crossover_rate: 0.9,
            survival_factor: 0.9,
            scaling_multiple: 2.0,
            seed: None,
            sleep_time: Duration::ZERO,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    iteration_limit: Option<IterationLimit>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    survival_factor: Option<f64>,
    scaling_multiple: Option<f64>,
    seed: Option<u64>,
    sleep_time: Option<Duration>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn iteration_limit(mut self, value: IterationLimit) -> Self {
        self.iteration_limit = Some(value);
        self
    }

    /// Shorthand for `iteration_limit(IterationLimit::Bounded(value))`.
    pub fn max_iterations(self, value: usize) -> Self {
        self.iteration_limit(IterationLimit::Bounded(value))
    }

    pub fn unbounded(self) -> Self {
        self.iteration_limit(IterationLimit::Unbounded)
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn survival_factor(mut self, value: f64) -> Self {
        self.survival_factor = Some(value);
        self
    }

    pub fn scaling_multiple(mut self, value: f64) -> Self {
        self.scaling_multiple = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn sleep_time(mut self, value: Duration) -> Self {
        self.sleep_time = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    ///
    /// # Errors
    ///
    /// See [`EvolutionOptions::validate`].
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();

        let options = EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            iteration_limit: self.iteration_limit.unwrap_or(defaults.iteration_limit),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            survival_factor: self.survival_factor.unwrap_or(defaults.survival_factor),
            scaling_multiple: self.scaling_multiple.unwrap_or(defaults.scaling_multiple),
            seed: self.seed.or(defaults.seed),
            sleep_time: self.sleep_time.unwrap_or(defaults.sleep_time),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();

        assert!(options.validate().is_ok());
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_crossover_rate(), 0.9);
        assert_eq!(options.get_seed(), None);
        assert_eq!(options.get_sleep_time(), Duration::ZERO);
        assert_eq!(options.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_builder() {
        let options = EvolutionOptions::builder()
            .population_size(50)
            .max_iterations(3)
            .mutation_rate(0.2)
            .crossover_rate(0.5)
            .survival_factor(0.8)
            .scaling_multiple(10.0)
            .seed(7)
            .sleep_time(Duration::from_millis(1))
            .parallel_threshold(16)
            .build()
            .unwrap();

        assert_eq!(options.get_population_size(), 50);
        assert_eq!(options.get_iteration_limit(), IterationLimit::Bounded(3));
        assert_eq!(options.get_mutation_rate(), 0.2);
        assert_eq!(options.get_crossover_rate(), 0.5);
        assert_eq!(options.get_survival_factor(), 0.8);
        assert_eq!(options.get_scaling_multiple(), 10.0);
        assert_eq!(options.get_seed(), Some(7));
        assert_eq!(options.get_sleep_time(), Duration::from_millis(1));
        assert_eq!(options.get_parallel_threshold(), 16);
    }

    #[test]
    fn test_zero_iterations_needs_explicit_unbounded() {
        let result = EvolutionOptions::builder().max_iterations(0).build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let options = EvolutionOptions::builder().unbounded().build().unwrap();
        assert_eq!(options.get_iteration_limit(), IterationLimit::Unbounded);
    }

    #[test]
    fn test_invalid_values() {
        assert!(EvolutionOptions::builder().population_size(0).build().is_err());
        assert!(EvolutionOptions::builder().mutation_rate(1.5).build().is_err());
        assert!(EvolutionOptions::builder()
            .crossover_rate(f64::NAN)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .survival_factor(-0.1)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .scaling_multiple(1.0)
            .build()
            .is_err());
    }

    #[test]
    fn test_setters_then_validate() {
        let mut options = EvolutionOptions::default();
        options.set_iteration_limit(IterationLimit::Bounded(0));
        assert!(options.validate().is_err());

        options.set_iteration_limit(IterationLimit::Bounded(1));
        options.set_population_size(2);
        options.set_seed(Some(3));
        options.set_sleep_time(Duration::from_micros(5));
        options.set_parallel_threshold(4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_iteration_limit_allows() {
        let limit = IterationLimit::Bounded(3);

        assert!(limit.allows(1));
        assert!(limit.allows(3));
        assert!(!limit.allows(4));
        assert!(IterationLimit::Unbounded.allows(usize::MAX));
    }
}
