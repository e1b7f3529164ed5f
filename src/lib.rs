pub mod breeding;
pub mod error;
pub mod evolution;
pub mod evoreal;
pub mod optimizer;
pub mod organism;
pub mod rng;
pub mod roulette;
pub mod scaling;
pub mod selection;
pub mod stats;

// Re-export commonly used types for convenience
pub use breeding::{Mutator, Reproducer};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{Analyzer, Evocosm, EvocosmBuilder, EvolutionOptions, Landscape, Listener};
pub use evoreal::RealGeneOps;
pub use organism::Organism;
pub use rng::RandomNumberGenerator;
pub use roulette::RouletteWheel;
pub use scaling::Scaler;
pub use selection::Selector;
pub use stats::FitnessStats;
