//! # Error Types
//!
//! This module defines the error type shared by every component of the engine.
//! Validation failures (bad roulette weights, bad bounds, bad options) are
//! always surfaced to the caller; no partially-built value is ever returned.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evocosm::error::{GeneticError, Result};
//! use evocosm::roulette::RouletteWheel;
//!
//! fn build() -> Result<RouletteWheel> {
//!     RouletteWheel::new(&[1.0, 2.0, 3.0])
//! }
//!
//! assert!(build().is_ok());
//! assert!(matches!(
//!     RouletteWheel::new(&[]),
//!     Err(GeneticError::EmptyWeights)
//! ));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evocosm::error::{GeneticError, OptionExt};
//!
//! fn first_fitness(fitness: &[f64]) -> evocosm::error::Result<f64> {
//!     fitness.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the evolutionary engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A roulette wheel was given no weights.
    #[error("Roulette wheel can not have zero size")]
    EmptyWeights,

    /// The weight bounds of a roulette wheel are unusable.
    #[error("Invalid weight bounds: minimum {min} must be non-negative and less than maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// The clamped weights of a roulette wheel do not sum to a usable total.
    #[error("Roulette wheel must have a finite total weight > zero, got {0}")]
    InvalidTotalWeight(f64),

    /// An index was outside the valid range of a container.
    #[error("Index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Mutation region weights were negative, non-finite or summed to zero.
    #[error("Invalid mutation weights: {0}")]
    InvalidWeights(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when parents cannot be bred together.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
