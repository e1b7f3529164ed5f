//! # FunctionOptimizer
//!
//! A ready-made engine that maximizes a real function of several arguments.
//! The population starts uniformly spread over `[min_arg, max_arg]` in every
//! dimension and evolves with:
//!
//! - [`RealMutator`] at the configured mutation rate
//! - [`RealReproducer`] at the configured crossover rate
//! - [`LinearNormScaler`] with the configured scaling multiple
//! - [`ElitismSelector`] with the configured survival factor
//! - [`StagnationAnalyzer`] bounded by the configured iteration limit
//! - [`TracingListener`] reporting each generation through `tracing`
//!
//! Fitness is evaluated with a [`ParallelLandscape`] using the configured
//! parallel threshold.
//!
//! ```rust
//! use evocosm::evolution::EvolutionOptions;
//! use evocosm::optimizer::FunctionOptimizer;
//!
//! // peak at (1, -2)
//! let f = |x: &[f64]| 100.0 - ((x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2));
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .max_iterations(50)
//!     .scaling_multiple(10.0)
//!     .seed(5)
//!     .build()
//!     .unwrap();
//!
//! let mut optimizer = FunctionOptimizer::new(f, 2, -5.0, 5.0, &options).unwrap();
//! let best = optimizer.run().unwrap();
//!
//! assert_eq!(best.genes.len(), 2);
//! assert!(best.fitness <= 100.0);
//! ```
//!
//! Elitism works on linearly normalized fitness, which only carries the best
//! organism forward while fitness stays non-negative. To minimize, subtract
//! the function from an upper bound rather than just negating it.

use tracing::info;

use crate::{
    breeding::{RealMutator, RealReproducer},
    error::{GeneticError, Result},
    evolution::{
        Evocosm, EvocosmBuilder, EvolutionOptions, FunctionLandscape, ParallelLandscape,
        StagnationAnalyzer, TracingListener,
    },
    organism::Organism,
    rng::RandomNumberGenerator,
    scaling::LinearNormScaler,
    selection::ElitismSelector,
    stats::FitnessStats,
};

/// The engine type a [`FunctionOptimizer`] drives.
pub type FunctionEvocosm<F> = Evocosm<
    Vec<f64>,
    ParallelLandscape<FunctionLandscape<F>>,
    RealMutator,
    RealReproducer,
    LinearNormScaler,
    ElitismSelector,
    StagnationAnalyzer<Vec<f64>>,
    TracingListener,
>;

/// Maximizes `F` over a box-shaped domain.
pub struct FunctionOptimizer<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    evocosm: FunctionEvocosm<F>,
}

impl<F> FunctionOptimizer<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Creates an optimizer for a function of `num_args` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] if `num_args` is zero, if the
    /// bounds are not finite with `min_arg < max_arg`, or if `options` fail
    /// validation.
    pub fn new(
        function: F,
        num_args: usize,
        min_arg: f64,
        max_arg: f64,
        options: &EvolutionOptions,
    ) -> Result<Self> {
        options.validate()?;

        if num_args == 0 {
            return Err(GeneticError::Configuration(
                "Function must take at least one argument".to_string(),
            ));
        }

        if !min_arg.is_finite() || !max_arg.is_finite() || min_arg >= max_arg {
            return Err(GeneticError::Configuration(format!(
                "Argument range [{}, {}] is invalid",
                min_arg, max_arg
            )));
        }

        let mut rng = options
            .get_seed()
            .map_or_else(RandomNumberGenerator::new, RandomNumberGenerator::from_seed);

        let span = max_arg - min_arg;
        let population: Vec<Organism<Vec<f64>>> = (0..options.get_population_size())
            .map(|_| {
                Organism::new(
                    (0..num_args)
                        .map(|_| min_arg + rng.get_real() * span)
                        .collect(),
                )
            })
            .collect();

        let landscape = ParallelLandscape::new(
            FunctionLandscape::new(function),
            options.get_parallel_threshold(),
        );

        let evocosm = EvocosmBuilder::new()
            .with_population(population)
            .with_landscape(landscape)
            .with_mutator(RealMutator::new(options.get_mutation_rate())?)
            .with_reproducer(RealReproducer::new(options.get_crossover_rate())?)
            .with_scaler(LinearNormScaler::new(options.get_scaling_multiple())?)
            .with_selector(ElitismSelector::new(options.get_survival_factor())?)
            .with_analyzer(StagnationAnalyzer::from_options(options)?)
            .with_listener(TracingListener::new())
            .with_rng(rng)
            .with_sleep_time(options.get_sleep_time())
            .build()?;

        Ok(Self { evocosm })
    }

    /// Evolves until the analyzer stops the run and returns the best
    /// organism of the final population, with its unscaled fitness.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while running a generation.
    pub fn run(&mut self) -> Result<Organism<Vec<f64>>> {
        let cycles = self.evocosm.run()?;
        let best = FitnessStats::new(self.evocosm.population())?.into_best();

        info!(cycles, fitness = best.fitness, genes = ?best.genes, "optimization finished");
        Ok(best)
    }

    pub fn evocosm(&self) -> &FunctionEvocosm<F> {
        &self.evocosm
    }

    pub fn evocosm_mut(&mut self) -> &mut FunctionEvocosm<F> {
        &mut self.evocosm
    }
}
