use std::marker::PhantomData;
use std::time::Duration;

use crate::{
    breeding::{Mutator, Reproducer},
    error::{GeneticError, Result},
    evolution::{
        options::EvolutionOptions, Analyzer, Evocosm, Landscape, Listener, MaxIterationsAnalyzer,
        NullListener,
    },
    organism::Organism,
    rng::RandomNumberGenerator,
    scaling::Scaler,
    selection::Selector,
};

/// Assembles an [`Evocosm`].
///
/// The population, landscape, mutator, reproducer, scaler and selector are
/// required. The analyzer defaults to [`MaxIterationsAnalyzer::default`]
/// (100 breeding cycles) and the listener to [`NullListener`]; replacing
/// either changes the builder's type. Without a seed the generator is seeded
/// from system entropy.
///
/// # Examples
///
/// ```
/// use evocosm::breeding::{RealMutator, RealReproducer};
/// use evocosm::evolution::{EvocosmBuilder, FunctionLandscape, MaxIterationsAnalyzer};
/// use evocosm::organism::Organism;
/// use evocosm::scaling::NullScaler;
/// use evocosm::selection::ElitismSelector;
/// use evocosm::error::Result;
///
/// fn main() -> Result<()> {
///     let population = (0..10).map(|i| Organism::new(vec![i as f64])).collect();
///
///     let mut evocosm = EvocosmBuilder::new()
///         .with_population(population)
///         .with_landscape(FunctionLandscape::new(|x: &[f64]| -x[0].abs()))
///         .with_mutator(RealMutator::new(0.1)?)
///         .with_reproducer(RealReproducer::new(0.9)?)
///         .with_scaler(NullScaler)
///         .with_selector(ElitismSelector::default())
///         .with_analyzer(MaxIterationsAnalyzer::new(3)?)
///         .with_seed(42)
///         .build()?;
///
///     assert_eq!(evocosm.run()?, 3);
///     assert_eq!(evocosm.population().len(), 10);
///
///     Ok(())
/// }
/// ```
pub struct EvocosmBuilder<G, L, M, R, S, Sel, A, Li> {
    population: Option<Vec<Organism<G>>>,
    landscape: Option<L>,
    mutator: Option<M>,
    reproducer: Option<R>,
    scaler: Option<S>,
    selector: Option<Sel>,
    analyzer: A,
    listener: Li,
    rng: Option<RandomNumberGenerator>,
    sleep_time: Duration,
    _marker: PhantomData<G>,
}

impl<G, L, M, R, S, Sel> EvocosmBuilder<G, L, M, R, S, Sel, MaxIterationsAnalyzer, NullListener> {
    pub fn new() -> Self {
        Self {
            population: None,
            landscape: None,
            mutator: None,
            reproducer: None,
            scaler: None,
            selector: None,
            analyzer: MaxIterationsAnalyzer::default(),
            listener: NullListener,
            rng: None,
            sleep_time: Duration::ZERO,
            _marker: PhantomData,
        }
    }
}

impl<G, L, M, R, S, Sel> Default
    for EvocosmBuilder<G, L, M, R, S, Sel, MaxIterationsAnalyzer, NullListener>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, L, M, R, S, Sel, A, Li> EvocosmBuilder<G, L, M, R, S, Sel, A, Li> {
    pub fn with_population(mut self, population: Vec<Organism<G>>) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_landscape(mut self, landscape: L) -> Self {
        self.landscape = Some(landscape);
        self
    }

    pub fn with_mutator(mut self, mutator: M) -> Self {
        self.mutator = Some(mutator);
        self
    }

    pub fn with_reproducer(mut self, reproducer: R) -> Self {
        self.reproducer = Some(reproducer);
        self
    }

    pub fn with_scaler(mut self, scaler: S) -> Self {
        self.scaler = Some(scaler);
        self
    }

    pub fn with_selector(mut self, selector: Sel) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn with_analyzer<A2>(self, analyzer: A2) -> EvocosmBuilder<G, L, M, R, S, Sel, A2, Li> {
        EvocosmBuilder {
            population: self.population,
            landscape: self.landscape,
            mutator: self.mutator,
            reproducer: self.reproducer,
            scaler: self.scaler,
            selector: self.selector,
            analyzer,
            listener: self.listener,
            rng: self.rng,
            sleep_time: self.sleep_time,
            _marker: PhantomData,
        }
    }

    pub fn with_listener<Li2>(self, listener: Li2) -> EvocosmBuilder<G, L, M, R, S, Sel, A, Li2> {
        EvocosmBuilder {
            population: self.population,
            landscape: self.landscape,
            mutator: self.mutator,
            reproducer: self.reproducer,
            scaler: self.scaler,
            selector: self.selector,
            analyzer: self.analyzer,
            listener,
            rng: self.rng,
            sleep_time: self.sleep_time,
            _marker: PhantomData,
        }
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn with_sleep_time(mut self, sleep_time: Duration) -> Self {
        self.sleep_time = sleep_time;
        self
    }

    /// Applies the seed and sleep time of `options`.
    ///
    /// A seed already given through [`with_rng`](Self::with_rng) or
    /// [`with_seed`](Self::with_seed) is replaced only if the options carry
    /// one.
    pub fn with_options(mut self, options: &EvolutionOptions) -> Self {
        if let Some(seed) = options.get_seed() {
            self.rng = Some(RandomNumberGenerator::from_seed(seed));
        }
        self.sleep_time = options.get_sleep_time();
        self
    }
}

impl<G, L, M, R, S, Sel, A, Li> EvocosmBuilder<G, L, M, R, S, Sel, A, Li>
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
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] when a required part is
    /// missing and [`GeneticError::EmptyPopulation`] for an empty population.
    pub fn build(self) -> Result<Evocosm<G, L, M, R, S, Sel, A, Li>> {
        let population = self
            .population
            .ok_or_else(|| GeneticError::Configuration("Population not specified".to_string()))?;

        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let landscape = self
            .landscape
            .ok_or_else(|| GeneticError::Configuration("Landscape not specified".to_string()))?;

        let mutator = self
            .mutator
            .ok_or_else(|| GeneticError::Configuration("Mutator not specified".to_string()))?;

        let reproducer = self
            .reproducer
            .ok_or_else(|| GeneticError::Configuration("Reproducer not specified".to_string()))?;

        let scaler = self
            .scaler
            .ok_or_else(|| GeneticError::Configuration("Scaler not specified".to_string()))?;

        let selector = self
            .selector
            .ok_or_else(|| GeneticError::Configuration("Selector not specified".to_string()))?;

        Ok(Evocosm::new(
            population,
            landscape,
            mutator,
            reproducer,
            scaler,
            selector,
            self.analyzer,
            self.listener,
            self.rng.unwrap_or_default(),
            self.sleep_time,
        ))
    }
}
