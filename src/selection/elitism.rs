use crate::error::{GeneticError, Result};
use crate::organism::Organism;
use crate::selection::Selector;
use crate::stats::FitnessStats;

/// Keeps every organism whose fitness is strictly greater than
/// `factor * best_fitness`, in population order.
///
/// The threshold is relative to the best organism, so the number of
/// survivors adapts to how tightly the population is bunched. When the best
/// fitness is negative the threshold sits above it and nobody survives; pair
/// this selector with a scaler that keeps fitness positive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElitismSelector {
    factor: f64,
}

impl ElitismSelector {
    /// Creates a selector with a survival factor in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::Configuration`] for a factor outside `[0, 1]`.
    pub fn new(factor: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(GeneticError::Configuration(format!(
                "Elitism factor must be within [0, 1], got {}",
                factor
            )));
        }

        Ok(Self { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for ElitismSelector {
    fn default() -> Self {
        Self { factor: 0.9 }
    }
}

impl<G: Clone> Selector<G> for ElitismSelector {
    fn select_survivors(&self, population: &[Organism<G>]) -> Result<Vec<Organism<G>>> {
        let threshold = self.factor * FitnessStats::new(population)?.max();

        Ok(population
            .iter()
            .filter(|organism| organism.fitness > threshold)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(fitness: &[f64]) -> Vec<Organism<usize>> {
        fitness
            .iter()
            .enumerate()
            .map(|(genes, &fitness)| Organism { genes, fitness })
            .collect()
    }

    #[test]
    fn test_elitism_keeps_only_leader() {
        let pop = population(&[10.0, 9.0, 5.0, 1.0]);

        let survivors = ElitismSelector::default().select_survivors(&pop).unwrap();

        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].fitness, 10.0);
    }

    #[test]
    fn test_elitism_preserves_population_order() {
        let pop = population(&[5.0, 9.5, 1.0, 10.0, 9.2]);

        let survivors = ElitismSelector::default().select_survivors(&pop).unwrap();
        let genes: Vec<usize> = survivors.iter().map(|o| o.genes).collect();

        assert_eq!(genes, vec![1, 3, 4]);
    }

    #[test]
    fn test_zero_factor_keeps_all_positive() {
        let pop = population(&[0.0, 1.0, 2.0]);

        let survivors = ElitismSelector::new(0.0)
            .unwrap()
            .select_survivors(&pop)
            .unwrap();

        assert_eq!(survivors.len(), 2);
    }

    #[test]
    fn test_full_factor_keeps_nobody() {
        let pop = population(&[3.0, 3.0]);

        let survivors = ElitismSelector::new(1.0)
            .unwrap()
            .select_survivors(&pop)
            .unwrap();

        assert!(survivors.is_empty());
    }

    #[test]
    fn test_empty_population() {
        let pop = population(&[]);
        assert_eq!(
            ElitismSelector::default().select_survivors(&pop),
            Err(GeneticError::EmptyPopulation)
        );
    }

    #[test]
    fn test_invalid_factor() {
        assert!(ElitismSelector::new(1.5).is_err());
        assert!(ElitismSelector::new(-0.1).is_err());
        assert!(ElitismSelector::new(f64::NAN).is_err());
    }
}
