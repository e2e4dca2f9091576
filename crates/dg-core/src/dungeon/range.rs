//! Half-open random ranges

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::rng::DungeonRng;

/// A `[min, max)` interval that yields uniformly random values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: usize,
    pub max: usize,
}

impl Range {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`
    ///
    /// `usize::MAX` has no successor, so that range comes out empty.
    pub const fn fixed(value: usize) -> Self {
        Self {
            min: value,
            max: value.saturating_add(1),
        }
    }

    /// Check if the range holds no values (`max <= min`)
    pub const fn is_empty(&self) -> bool {
        self.max <= self.min
    }

    /// Draw a value in `[min, max)`
    ///
    /// An empty range yields `min`.
    pub fn next(&self, rng: &mut DungeonRng) -> usize {
        rng.range(self.min, self.max)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}
