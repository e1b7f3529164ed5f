use std::fmt::Debug;

use crate::error::Result;
use crate::organism::Organism;

/// Trait for survivor selection strategies.
///
/// A selector decides which organisms of the scaled population carry over
/// unchanged into the next generation. It returns copies; the reproducer
/// fills the remaining slots with children.
///
/// # Examples
///
/// ```
/// use evocosm::organism::Organism;
/// use evocosm::selection::{ElitismSelector, Selector};
/// use evocosm::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Organism<u32>> = [10.0, 9.0, 5.0, 1.0]
///         .iter()
///         .enumerate()
///         .map(|(i, &fitness)| Organism { genes: i as u32, fitness })
///         .collect();
///
///     let survivors = ElitismSelector::default().select_survivors(&population)?;
///
///     assert_eq!(survivors.len(), 1);
///     assert_eq!(survivors[0].fitness, 10.0);
///
///     Ok(())
/// }
/// ```
pub trait Selector<G>: Debug + Send + Sync {
    /// Returns copies of the organisms that survive, at most
    /// `population.len()` of them.
    ///
    /// # Errors
    ///
    /// Selectors that depend on population statistics fail on an empty
    /// population.
    fn select_survivors(&self, population: &[Organism<G>]) -> Result<Vec<Organism<G>>>;
}

/// Every organism survives.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllSelector;

impl AllSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<G: Clone> Selector<G> for AllSelector {
    fn select_survivors(&self, population: &[Organism<G>]) -> Result<Vec<Organism<G>>> {
        Ok(population.to_vec())
    }
}

/// No organism survives; the next generation is all children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullSelector;

impl NullSelector {
    pub fn new() -> Self {
        Self
    }
}

impl<G> Selector<G> for NullSelector {
    fn select_survivors(&self, _population: &[Organism<G>]) -> Result<Vec<Organism<G>>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population() -> Vec<Organism<char>> {
        vec![
            Organism { genes: 'x', fitness: 1.0 },
            Organism { genes: 'y', fitness: 2.0 },
        ]
    }

    #[test]
    fn test_all_selector_copies_everything() {
        let pop = population();
        let survivors = AllSelector::new().select_survivors(&pop).unwrap();

        assert_eq!(survivors, pop);
    }

    #[test]
    fn test_null_selector_keeps_nothing() {
        let survivors = NullSelector::new().select_survivors(&population()).unwrap();
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_empty_population() {
        let empty: Vec<Organism<char>> = Vec::new();

        assert!(AllSelector.select_survivors(&empty).unwrap().is_empty());
        assert!(NullSelector.select_survivors(&empty).unwrap().is_empty());
    }
}
