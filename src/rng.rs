//! # RandomNumberGenerator
//!
//! Every random draw in the engine goes through a [`RandomNumberGenerator`],
//! which wraps the 64-bit "Keep It Simple Stupid" generator [`Kiss64`]. The
//! engine owns one instance and lends it to each strategy call, so a seeded
//! run is fully reproducible and two engines never share state.
//!
//! ## Example
//!
//! ```rust
//! use evocosm::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(42);
//! let mut b = RandomNumberGenerator::from_seed(42);
//!
//! let real = a.get_real();
//! assert!((0.0..1.0).contains(&real));
//! assert_eq!(real, b.get_real());
//!
//! let index = a.get_index(10);
//! assert!(index < 10);
//! ```
//!
//! Both types implement [`rand::RngCore`], so the distributions of the `rand`
//! crate are available as well:
//!
//! ```rust
//! use evocosm::rng::RandomNumberGenerator;
//! use rand::Rng;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let x: f64 = rng.gen_range(-1.0..1.0);
//! assert!((-1.0..1.0).contains(&x));
//! ```

use rand::{Error, RngCore, SeedableRng};

const X_INIT: u64 = 1_234_567_890_987_654_321;
const C_INIT: u64 = 123_456_123_456_123_456;
const Y_INIT: u64 = 362_436_362_436_362_436;
const Z_INIT: u64 = 1_066_149_217_761_810;
const T_INIT: u64 = 29_979_245_822_353_888;

/// Marsaglia's 64-bit KISS generator: a multiply-with-carry component
/// (`x`, `c`), a xorshift component (`y`) and a linear congruential
/// component (`z`), combined into `t` on every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kiss64 {
    x: u64,
    c: u64,
    y: u64,
    z: u64,
    t: u64,
    seed: u64,
}

impl Kiss64 {
    /// Creates a generator whose whole output sequence is determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut mix = seed;
        let x = X_INIT ^ splitmix64(&mut mix);
        // the xorshift component is stuck at zero forever if it ever reaches it
        let y = match Y_INIT ^ splitmix64(&mut mix) {
            0 => Y_INIT,
            y => y,
        };
        let z = Z_INIT ^ splitmix64(&mut mix);

        Self {
            x,
            c: C_INIT,
            y,
            z,
            t: T_INIT,
            seed,
        }
    }

    /// Returns the seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advances the state and returns the next 64-bit output.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        // multiply-with-carry
        self.t = (self.x << 58).wrapping_add(self.c);
        self.c = self.x >> 6;
        self.x = self.x.wrapping_add(self.t);
        self.c = self.c.wrapping_add(u64::from(self.x < self.t));

        // xorshift
        self.y ^= self.y << 13;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 43;

        // congruential
        self.z = self
            .z
            .wrapping_mul(6_906_969_069)
            .wrapping_add(1_234_567);

        self.t = self.x.wrapping_add(self.y).wrapping_add(self.z);
        self.t
    }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl RngCore for Kiss64 {
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Kiss64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state)
    }
}

/// The generator handle passed to every strategy.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: Kiss64,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Kiss64::with_seed(seed),
        }
    }

    /// Returns the seed of the underlying generator.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns a uniformly distributed real in `[0, 1)`.
    ///
    /// Uses the top 53 bits of the next output, so every value is exactly
    /// representable and 1.0 is never produced.
    pub fn get_real(&mut self) -> f64 {
        (self.rng.next() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Returns an index in `[0, n)`. Returns 0 when `n` is 0.
    pub fn get_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.rng.next() % n as u64) as usize
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomNumberGenerator {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}
