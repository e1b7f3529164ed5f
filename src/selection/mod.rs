pub mod elitism;
pub mod selector;

pub use elitism::ElitismSelector;
pub use selector::{AllSelector, NullSelector, Selector};
