//! # RealGeneOps
//!
//! Mutation and crossover for floating-point genes that work on the IEEE-754
//! bit pattern rather than on the numeric value. A mutation flips the sign,
//! one exponent bit, or one mantissa bit; a crossover splices the high bits
//! of one parent onto the low bits of the other.
//!
//! The operators never manufacture a NaN or an infinity. An exponent field of
//! all ones is the only way to get one, so exponent flips and crossover cuts
//! are redrawn until the field has at least one zero bit. A gene that is
//! already non-finite is passed through untouched.
//!
//! ```rust
//! use evocosm::evoreal::RealGeneOps;
//! use evocosm::rng::RandomNumberGenerator;
//!
//! let ops = RealGeneOps::default();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let mutated: f64 = ops.mutate(1.5, &mut rng);
//! assert!(mutated.is_finite());
//!
//! let child: f32 = ops.crossover(3.0, -0.25, &mut rng);
//! assert!(child.is_finite());
//! ```
//!
//! The relative region weights tune the search: a mantissa-only profile is a
//! fine local search, exponent flips are large jumps.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// IEEE-754 binary layouts the operators know how to manipulate.
///
/// Implemented for `f32` (binary32) and `f64` (binary64) only. Raw bits are
/// carried in the low bits of a `u64`.
pub trait RealGene: sealed::Sealed + Copy {
    /// Total width of the encoding in bits.
    const WIDTH: u32;
    /// Width of the biased exponent field.
    const EXPONENT_BITS: u32;
    /// Width of the fraction field.
    const MANTISSA_BITS: u32;

    fn to_raw(self) -> u64;
    fn from_raw(raw: u64) -> Self;
}

impl RealGene for f32 {
    const WIDTH: u32 = 32;
    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;

    fn to_raw(self) -> u64 {
        u64::from(self.to_bits())
    }

    fn from_raw(raw: u64) -> Self {
        f32::from_bits(raw as u32)
    }
}

impl RealGene for f64 {
    const WIDTH: u32 = 64;
    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;

    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    fn from_raw(raw: u64) -> Self {
        f64::from_bits(raw)
    }
}

fn exponent_mask<F: RealGene>() -> u64 {
    ((1u64 << F::EXPONENT_BITS) - 1) << F::MANTISSA_BITS
}

fn sign_mask<F: RealGene>() -> u64 {
    1u64 << (F::WIDTH - 1)
}

/// True when the exponent field is all ones (NaN or infinity).
fn is_non_finite<F: RealGene>(raw: u64) -> bool {
    raw & exponent_mask::<F>() == exponent_mask::<F>()
}

/// Weighted bit-level mutation and crossover for `f32` and `f64` genes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealGeneOps {
    sign_weight: f64,
    exponent_weight: f64,
    mantissa_weight: f64,
    total_weight: f64,
}

impl RealGeneOps {
    /// Creates operators with the given chance weights for the sign, exponent
    /// and mantissa regions. Each weight is a share of the sum of all three.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidWeights`] if any weight is negative or
    /// not finite, or if the weights sum to zero.
    pub fn new(sign_weight: f64, exponent_weight: f64, mantissa_weight: f64) -> Result<Self> {
        let weights = [sign_weight, exponent_weight, mantissa_weight];

        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(GeneticError::InvalidWeights(format!(
                "weights must be finite and non-negative, got {:?}",
                weights
            )));
        }

        let total_weight: f64 = weights.iter().sum();
        if total_weight <= 0.0 {
            return Err(GeneticError::InvalidWeights(
                "at least one region weight must be positive".to_string(),
            ));
        }

        Ok(Self {
            sign_weight,
            exponent_weight,
            mantissa_weight,
            total_weight,
        })
    }

    pub fn sign_weight(&self) -> f64 {
        self.sign_weight
    }

    pub fn exponent_weight(&self) -> f64 {
        self.exponent_weight
    }

    pub fn mantissa_weight(&self) -> f64 {
        self.mantissa_weight
    }

    /// Returns a mutated copy of `value`.
    ///
    /// A non-finite `value` is returned unchanged.
    pub fn mutate<F: RealGene>(&self, value: F, rng: &mut RandomNumberGenerator) -> F {
        let mut pick = rng.get_real() * self.total_weight;
        let raw = value.to_raw();

        if is_non_finite::<F>(raw) {
            return value;
        }

        if pick < self.sign_weight {
            return F::from_raw(raw ^ sign_mask::<F>());
        }

        pick -= self.sign_weight;

        if pick < self.exponent_weight {
            // one of the zero bits may be the last one; redraw until finite
            loop {
                let bit = rng.get_index(F::EXPONENT_BITS as usize) as u32;
                let candidate = raw ^ (1u64 << (F::MANTISSA_BITS + bit));
                if !is_non_finite::<F>(candidate) {
                    return F::from_raw(candidate);
                }
            }
        }

        let bit = rng.get_index(F::MANTISSA_BITS as usize) as u32;
        F::from_raw(raw ^ (1u64 << bit))
    }

    /// Returns a child whose bits at and above a random cut come from `first`
    /// and whose bits below it come from `second`.
    ///
    /// The cut is redrawn until the child is finite. If both parents are
    /// non-finite no cut can succeed and `first` is returned unchanged.
    pub fn crossover<F: RealGene>(
        &self,
        first: F,
        second: F,
        rng: &mut RandomNumberGenerator,
    ) -> F {
        let high = first.to_raw();
        let low = second.to_raw();

        if is_non_finite::<F>(high) && is_non_finite::<F>(low) {
            return first;
        }

        loop {
            let cut = rng.get_index(F::WIDTH as usize) as u32;
            let mask = u64::MAX << cut;
            let child = (high & mask) | (low & !mask);

            if !is_non_finite::<F>(child) {
                return F::from_raw(child);
            }
        }
    }
}

impl Default for RealGeneOps {
    /// Sign 5, exponent 5, mantissa 90.
    fn default() -> Self {
        Self {
            sign_weight: 5.0,
            exponent_weight: 5.0,
            mantissa_weight: 90.0,
            total_weight: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F64_SAMPLES: [f64; 10] = [
        0.0,
        -0.0,
        1.0,
        -1.5,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        5e-324,
        1.0e300,
        -3.25e-200,
    ];

    const F32_SAMPLES: [f32; 8] = [
        0.0,
        1.0,
        -2.75,
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        1e-45,
        123_456.78,
    ];

    #[test]
    fn test_mutate_f64_stays_finite() {
        let ops = RealGeneOps::default();

        for seed in 0..10u64 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            for i in 0..10_000 {
                let x = F64_SAMPLES[i % F64_SAMPLES.len()];
                let y = ops.mutate(x, &mut rng);
                assert!(y.is_finite(), "mutate({:e}) produced {:e}", x, y);
            }
        }
    }

    #[test]
    fn test_mutate_f32_stays_finite() {
        // exponent-heavy profile to exercise the redraw path
        let ops = RealGeneOps::new(1.0, 8.0, 1.0).unwrap();

        for seed in 0..10u64 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            for i in 0..10_000 {
                let x = F32_SAMPLES[i % F32_SAMPLES.len()];
                let y = ops.mutate(x, &mut rng);
                assert!(y.is_finite(), "mutate({:e}) produced {:e}", x, y);
            }
        }
    }

    #[test]
    fn test_mutate_random_walk_stays_finite() {
        let ops = RealGeneOps::new(1.0, 1.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(77);
        let mut x = 1.0f64;

        for _ in 0..100_000 {
            x = ops.mutate(x, &mut rng);
            assert!(x.is_finite());
        }
    }

    #[test]
    fn test_mutate_leaves_non_finite_untouched() {
        let ops = RealGeneOps::default();
        let mut rng = RandomNumberGenerator::from_seed(3);

        for _ in 0..100 {
            assert!(ops.mutate(f64::NAN, &mut rng).is_nan());
            assert_eq!(ops.mutate(f64::INFINITY, &mut rng), f64::INFINITY);
            assert_eq!(ops.mutate(f32::NEG_INFINITY, &mut rng), f32::NEG_INFINITY);
        }
    }

    #[test]
    fn test_sign_only_negates() {
        let ops = RealGeneOps::new(1.0, 0.0, 0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);

        assert_eq!(ops.mutate(2.5f64, &mut rng), -2.5);
        assert_eq!(ops.mutate(-7.0f32, &mut rng), 7.0);
    }

    #[test]
    fn test_mantissa_only_flips_one_fraction_bit() {
        let ops = RealGeneOps::new(0.0, 0.0, 1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        for _ in 0..1000 {
            let x = 3.75f64;
            let diff = x.to_bits() ^ ops.mutate(x, &mut rng).to_bits();
            assert_eq!(diff.count_ones(), 1);
            assert!(diff < (1u64 << 52));
        }
    }

    #[test]
    fn test_exponent_only_flips_one_exponent_bit() {
        let ops = RealGeneOps::new(0.0, 1.0, 0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(6);

        for _ in 0..1000 {
            let x = -0.625f32;
            let diff = x.to_bits() ^ ops.mutate(x, &mut rng).to_bits();
            assert_eq!(diff.count_ones(), 1);
            assert_eq!(diff & 0x7F80_0000, diff);
        }
    }

    #[test]
    fn test_exponent_redraw_when_one_bit_short() {
        // exponent 0x7FE: flipping its only zero bit would give infinity
        let ops = RealGeneOps::new(0.0, 1.0, 0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(12);

        for _ in 0..1000 {
            assert!(ops.mutate(f64::MAX, &mut rng).is_finite());
        }
    }

    #[test]
    fn test_crossover_stays_finite() {
        let ops = RealGeneOps::default();

        for seed in 0..10u64 {
            let mut rng = RandomNumberGenerator::from_seed(seed);
            for i in 0..F64_SAMPLES.len() {
                for j in 0..F64_SAMPLES.len() {
                    let child = ops.crossover(F64_SAMPLES[i], F64_SAMPLES[j], &mut rng);
                    assert!(child.is_finite());
                }
            }
            for i in 0..F32_SAMPLES.len() {
                for j in 0..F32_SAMPLES.len() {
                    let child = ops.crossover(F32_SAMPLES[i], F32_SAMPLES[j], &mut rng);
                    assert!(child.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_crossover_is_single_cut() {
        let ops = RealGeneOps::default();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let high = 1234.5678f64.to_bits();
        let low = (-0.000321f64).to_bits();

        for _ in 0..1000 {
            let child = ops
                .crossover(f64::from_bits(high), f64::from_bits(low), &mut rng)
                .to_bits();

            // some cut reproduces the child exactly
            let found = (0..64).any(|cut| {
                let mask = u64::MAX << cut;
                (high & mask) | (low & !mask) == child
            });
            assert!(found);
        }
    }

    #[test]
    fn test_crossover_of_identical_parents() {
        let ops = RealGeneOps::default();
        let mut rng = RandomNumberGenerator::from_seed(10);

        assert_eq!(ops.crossover(42.0f64, 42.0, &mut rng), 42.0);
        assert_eq!(ops.crossover(-1.0f32, -1.0, &mut rng), -1.0);
    }

    #[test]
    fn test_crossover_with_one_non_finite_parent() {
        let ops = RealGeneOps::default();
        let mut rng = RandomNumberGenerator::from_seed(11);

        for _ in 0..1000 {
            assert!(ops.crossover(f64::NAN, 2.0, &mut rng).is_finite());
            assert!(ops.crossover(1.0f32, f32::INFINITY, &mut rng).is_finite());
        }
    }

    #[test]
    fn test_crossover_of_non_finite_parents() {
        let ops = RealGeneOps::default();
        let mut rng = RandomNumberGenerator::from_seed(2);

        assert_eq!(
            ops.crossover(f64::INFINITY, f64::NEG_INFINITY, &mut rng),
            f64::INFINITY
        );
    }

    #[test]
    fn test_invalid_weights() {
        assert!(matches!(
            RealGeneOps::new(-1.0, 5.0, 90.0),
            Err(GeneticError::InvalidWeights(_))
        ));
        assert!(matches!(
            RealGeneOps::new(0.0, 0.0, 0.0),
            Err(GeneticError::InvalidWeights(_))
        ));
        assert!(matches!(
            RealGeneOps::new(f64::NAN, 1.0, 1.0),
            Err(GeneticError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_default_weights() {
        let ops = RealGeneOps::default();
        assert_eq!(ops, RealGeneOps::new(5.0, 5.0, 90.0).unwrap());
        assert_eq!(ops.mantissa_weight(), 90.0);
    }
}
