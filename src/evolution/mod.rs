//! # Evolution
//!
//! The generational engine and the strategy contracts that surround it:
//! [`Landscape`] for fitness, [`Analyzer`] for termination, [`Listener`] for
//! observation, plus [`EvolutionOptions`] for run configuration.
pub mod analyzer;
pub mod builder;
pub mod evocosm;
pub mod landscape;
pub mod listener;
pub mod options;

pub use analyzer::{Analyzer, MaxIterationsAnalyzer, StagnationAnalyzer, DEFAULT_STALL_LIMIT};
pub use builder::EvocosmBuilder;
pub use evocosm::Evocosm;
pub use landscape::{FunctionLandscape, Landscape, ParallelLandscape};
pub use listener::{Listener, NullListener, TracingListener};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, IterationLimit};
