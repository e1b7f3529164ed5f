//! # RouletteWheel
//!
//! Fitness-proportionate sampling. Each index owns a slice of the wheel as
//! wide as its weight; a draw spins a ball to a uniform point on the wheel
//! and walks the slices until the ball comes to rest.
//!
//! Weights are absolute-valued and clamped into `[min_weight, max_weight]` on
//! the way in, so a zero or negative fitness still keeps a sliver of the
//! wheel under the default bounds.
//!
//! # Examples
//!
//! ```
//! use evocosm::roulette::RouletteWheel;
//! use evocosm::rng::RandomNumberGenerator;
//! use evocosm::error::Result;
//!
//! fn main() -> Result<()> {
//!     let mut rng = RandomNumberGenerator::from_seed(42);
//!     let mut wheel = RouletteWheel::new(&[1.0, 3.0])?;
//!
//!     let index = wheel.get_index(&mut rng);
//!     assert!(index < 2);
//!
//!     let previous = wheel.set_weight(0, 2.0)?;
//!     assert_eq!(previous, 1.0);
//!     assert_eq!(wheel.total_weight(), 5.0);
//!
//!     Ok(())
//! }
//! ```

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// A weighted index sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct RouletteWheel {
    weights: Vec<f64>,
    total_weight: f64,
    min_weight: f64,
    max_weight: f64,
}

impl RouletteWheel {
    /// Creates a wheel with bounds `[f64::EPSILON, f64::MAX]`.
    ///
    /// # Errors
    ///
    /// See [`with_bounds`](Self::with_bounds).
    pub fn new(weights: &[f64]) -> Result<Self> {
        Self::with_bounds(weights, f64::EPSILON, f64::MAX)
    }

    /// Creates a wheel whose weights are clamped into `[min_weight, max_weight]`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `weights` is empty
    /// - `min_weight` is negative or not finite, or `min_weight >= max_weight`
    /// - the clamped weights do not sum to a finite value greater than zero
    pub fn with_bounds(weights: &[f64], min_weight: f64, max_weight: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(GeneticError::EmptyWeights);
        }

        if !min_weight.is_finite()
            || min_weight < 0.0
            || max_weight.is_nan()
            || min_weight >= max_weight
        {
            return Err(GeneticError::InvalidBounds {
                min: min_weight,
                max: max_weight,
            });
        }

        let weights: Vec<f64> = weights
            .iter()
            .map(|&w| clamp_weight(w, min_weight, max_weight))
            .collect();
        let total_weight: f64 = weights.iter().sum();

        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(GeneticError::InvalidTotalWeight(total_weight));
        }

        Ok(Self {
            weights,
            total_weight,
            min_weight,
            max_weight,
        })
    }

    /// Number of indices on the wheel.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`: a wheel cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all clamped weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The clamped weight at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::IndexOutOfRange`] for an invalid index.
    pub fn weight(&self, index: usize) -> Result<f64> {
        self.weights
            .get(index)
            .copied()
            .ok_or(GeneticError::IndexOutOfRange {
                index,
                size: self.weights.len(),
            })
    }

    /// Replaces the weight at `index`, returning the previous weight.
    ///
    /// The new weight is clamped exactly like the constructor clamps. The
    /// total is updated incrementally and recomputed from scratch whenever
    /// the update leaves it non-finite or non-positive.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the wheel unchanged, if:
    /// - `index` is out of range
    /// - `weight` is NaN or infinite
    /// - the new weights do not sum to a finite value greater than zero
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<f64> {
        if !weight.is_finite() {
            return Err(GeneticError::InvalidWeights(format!(
                "Weight at index {} must be finite, got {}",
                index, weight
            )));
        }

        let size = self.weights.len();
        let slot = self
            .weights
            .get_mut(index)
            .ok_or(GeneticError::IndexOutOfRange { index, size })?;

        let weight = clamp_weight(weight, self.min_weight, self.max_weight);
        let previous = std::mem::replace(slot, weight);

        let mut total_weight = self.total_weight + (weight - previous);
        if !total_weight.is_finite() || total_weight <= 0.0 {
            total_weight = self.weights.iter().sum();
        }

        if !total_weight.is_finite() || total_weight <= 0.0 {
            self.weights[index] = previous;
            return Err(GeneticError::InvalidTotalWeight(total_weight));
        }

        self.total_weight = total_weight;
        Ok(previous)
    }

    /// Draws an index with probability proportional to its weight.
    ///
    /// Ties at a slice boundary go to the earlier index. If rounding carries
    /// the ball past the last slice, the last index is returned.
    pub fn get_index(&self, rng: &mut RandomNumberGenerator) -> usize {
        let mut choice = rng.get_real() * self.total_weight;

        for (index, &weight) in self.weights.iter().enumerate() {
            if choice <= weight {
                return index;
            }
            choice -= weight;
        }

        self.weights.len() - 1
    }
}

fn clamp_weight(weight: f64, min_weight: f64, max_weight: f64) -> f64 {
    let weight = weight.abs();
    if weight < min_weight {
        min_weight
    } else if weight > max_weight {
        max_weight
    } else {
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_follows_weights() {
        let wheel = RouletteWheel::new(&[1.0, 3.0]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let draws = 100_000;
        let hits = (0..draws).filter(|_| wheel.get_index(&mut rng) == 1).count();
        let frequency = hits as f64 / draws as f64;

        assert!((frequency - 0.75).abs() < 0.01, "frequency was {}", frequency);
    }

    #[test]
    fn test_negative_weights_are_absolute() {
        let wheel = RouletteWheel::new(&[-2.0, 2.0]).unwrap();

        assert_eq!(wheel.weight(0).unwrap(), 2.0);
        assert_eq!(wheel.total_weight(), 4.0);
    }

    #[test]
    fn test_zero_weights_clamped_to_minimum() {
        let wheel = RouletteWheel::new(&[0.0, 0.0, 0.0]).unwrap();

        assert_eq!(wheel.weight(1).unwrap(), f64::EPSILON);
        assert!(wheel.total_weight() > 0.0);
    }

    #[test]
    fn test_weights_clamped_to_bounds() {
        let wheel = RouletteWheel::with_bounds(&[0.5, 5.0, 50.0], 1.0, 10.0).unwrap();

        assert_eq!(wheel.weight(0).unwrap(), 1.0);
        assert_eq!(wheel.weight(1).unwrap(), 5.0);
        assert_eq!(wheel.weight(2).unwrap(), 10.0);
        assert_eq!(wheel.total_weight(), 16.0);
    }

    #[test]
    fn test_empty_weights() {
        assert_eq!(
            RouletteWheel::new(&[]).unwrap_err(),
            GeneticError::EmptyWeights
        );
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(matches!(
            RouletteWheel::with_bounds(&[1.0], 2.0, 2.0),
            Err(GeneticError::InvalidBounds { .. })
        ));
        assert!(matches!(
            RouletteWheel::with_bounds(&[1.0], 3.0, 2.0),
            Err(GeneticError::InvalidBounds { .. })
        ));
        assert!(matches!(
            RouletteWheel::with_bounds(&[1.0], -1.0, 2.0),
            Err(GeneticError::InvalidBounds { .. })
        ));
        assert!(matches!(
            RouletteWheel::with_bounds(&[1.0], f64::NAN, 2.0),
            Err(GeneticError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_zero_total_weight() {
        assert!(matches!(
            RouletteWheel::with_bounds(&[0.0, 0.0], 0.0, 1.0),
            Err(GeneticError::InvalidTotalWeight(_))
        ));
    }

    #[test]
    fn test_overflowing_total_weight() {
        assert!(matches!(
            RouletteWheel::new(&[f64::MAX, f64::MAX]),
            Err(GeneticError::InvalidTotalWeight(_))
        ));
    }

    #[test]
    fn test_set_weight() {
        let mut wheel = RouletteWheel::with_bounds(&[1.0, 2.0, 3.0], 0.5, 4.0).unwrap();

        assert_eq!(wheel.set_weight(1, 10.0).unwrap(), 2.0);
        assert_eq!(wheel.weight(1).unwrap(), 4.0);
        assert_eq!(wheel.total_weight(), 8.0);

        assert_eq!(wheel.set_weight(0, -0.1).unwrap(), 1.0);
        assert_eq!(wheel.weight(0).unwrap(), 0.5);
        assert_eq!(wheel.total_weight(), 7.5);
    }

    #[test]
    fn test_set_weight_rejects_non_finite() {
        let mut wheel = RouletteWheel::new(&[1.0, 3.0]).unwrap();

        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                wheel.set_weight(0, weight),
                Err(GeneticError::InvalidWeights(_))
            ));
        }

        assert_eq!(wheel.weight(0).unwrap(), 1.0);
        assert_eq!(wheel.total_weight(), 4.0);

        let mut rng = RandomNumberGenerator::from_seed(4);
        let hits = (0..1000).filter(|_| wheel.get_index(&mut rng) == 0).count();
        assert!(hits > 150 && hits < 350, "index 0 drawn {} times", hits);
    }

    #[test]
    fn test_set_weight_overflowing_total_is_rolled_back() {
        let mut wheel = RouletteWheel::new(&[1.0, 1.0]).unwrap();

        assert_eq!(wheel.set_weight(0, f64::MAX).unwrap(), 1.0);
        assert!(wheel.total_weight().is_finite());

        assert!(matches!(
            wheel.set_weight(1, f64::MAX),
            Err(GeneticError::InvalidTotalWeight(_))
        ));
        assert_eq!(wheel.weight(1).unwrap(), 1.0);
        assert!(wheel.total_weight().is_finite());
    }

    #[test]
    fn test_set_weight_recovers_from_cancellation() {
        let mut wheel = RouletteWheel::new(&[1e300, 1.0]).unwrap();

        assert_eq!(wheel.set_weight(0, 0.0).unwrap(), 1e300);
        assert_eq!(wheel.weight(0).unwrap(), f64::EPSILON);
        assert_eq!(wheel.total_weight(), 1.0 + f64::EPSILON);

        let mut rng = RandomNumberGenerator::from_seed(8);
        let hits = (0..1000).filter(|_| wheel.get_index(&mut rng) == 1).count();
        assert!(hits > 990, "index 1 drawn {} times", hits);
    }

    #[test]
    fn test_set_weight_total_stays_valid() {
        let mut wheel = RouletteWheel::with_bounds(&[1.0, 2.0], 0.0, f64::MAX).unwrap();

        assert_eq!(wheel.set_weight(0, 0.0).unwrap(), 1.0);
        assert!(matches!(
            wheel.set_weight(1, 0.0),
            Err(GeneticError::InvalidTotalWeight(_))
        ));
        assert_eq!(wheel.weight(0).unwrap(), 0.0);
        assert_eq!(wheel.weight(1).unwrap(), 2.0);
        assert_eq!(wheel.total_weight(), 2.0);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut wheel = RouletteWheel::new(&[1.0, 2.0]).unwrap();

        assert_eq!(
            wheel.set_weight(2, 1.0).unwrap_err(),
            GeneticError::IndexOutOfRange { index: 2, size: 2 }
        );
        assert!(wheel.weight(5).is_err());
        assert_eq!(wheel.total_weight(), 3.0);
    }

    #[test]
    fn test_dominant_weight() {
        let wheel = RouletteWheel::with_bounds(&[0.0, 1.0, 0.0], 0.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(9);

        for _ in 0..1000 {
            assert_eq!(wheel.get_index(&mut rng), 1);
        }
    }

    #[test]
    fn test_single_slot() {
        let wheel = RouletteWheel::new(&[0.25]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert_eq!(wheel.len(), 1);
        assert!(!wheel.is_empty());
        assert_eq!(wheel.get_index(&mut rng), 0);
    }
}
