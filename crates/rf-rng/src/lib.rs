//! Random number generation for realmforge
//!
//! Uses a seeded ChaCha RNG so realm generation is reproducible: the same
//! seed always yields the same terrain, buildings and emitter timings.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; a restored generator restarts its sequence.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[0, n)`
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform integer in `[1, n]`
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: i32) -> i32 {
        if n <= 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Bounded uniform integer in `[lo, hi]` inclusive
    ///
    /// Returns `lo` when the range is empty or inverted.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Sum of n rolls of `[1, m]`
    pub fn dice(&mut self, n: i32, m: i32) -> i32 {
        (0..n).map(|_| self.rnd(m)).sum()
    }

    /// Returns true with probability 1/n
    pub fn one_in(&mut self, n: i32) -> bool {
        self.rn2(n) == 0
    }

    /// Returns true with probability p percent
    pub fn percent(&mut self, p: u32) -> bool {
        self.rn2(100) < p as i32
    }

    /// Uniform float in `[0.0, 1.0)`
    pub fn frac(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
