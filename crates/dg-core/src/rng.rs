//! Random number generation for dungeon layout
//!
//! Uses a seeded ChaCha RNG so a seed reproduces a layout exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Layout random number generator
///
/// Wraps ChaCha8Rng and remembers its seed so a finished dungeon can
/// report how to reproduce itself. Each generator owns one of these;
/// nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
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

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns min..max-1
    ///
    /// Returns `min` when the interval is empty.
    pub fn range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}

impl Default for DungeonRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
