//! Tile grid
//!
//! A single flat buffer indexed `x * height + z`. The x axis runs left to
//! right, z runs bottom to top.

use core::fmt;
use core::ops::Index;

use serde::{Deserialize, Serialize};

use super::TileKind;
use crate::error::ConfigError;

/// Fixed-size 2-D map of tile kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Allocate a `width x height` grid of empty tiles
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells > 0)
            .ok_or(ConfigError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            tiles: vec![TileKind::Empty; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, x: usize, z: usize) -> bool {
        x < self.width && z < self.height
    }

    fn offset(&self, x: usize, z: usize) -> Option<usize> {
        self.contains(x, z).then(|| x * self.height + z)
    }

    /// Get the tile at a coordinate, `None` outside the grid
    pub fn get(&self, x: usize, z: usize) -> Option<TileKind> {
        self.offset(x, z).map(|i| self.tiles[i])
    }

    /// Overwrite a tile. Returns false (and changes nothing) outside the grid.
    pub fn set(&mut self, x: usize, z: usize, kind: TileKind) -> bool {
        match self.offset(x, z) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Mark a tile as wall unless it is already floor
    pub fn mark_wall(&mut self, x: usize, z: usize) {
        if let Some(i) = self.offset(x, z)
            && self.tiles[i] != TileKind::Floor
        {
            self.tiles[i] = TileKind::Wall;
        }
    }

    /// Iterate `(x, z, kind)` in x-major, z-minor order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        let height = self.height;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (i / height, i % height, kind))
    }

    /// Count tiles of one kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// Render one text line per z row, top row first
    pub fn rows(&self) -> Vec<String> {
        (0..self.height)
            .rev()
            .map(|z| (0..self.width).map(|x| self[(x, z)].symbol()).collect())
            .collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = TileKind;

    fn index(&self, (x, z): (usize, usize)) -> &TileKind {
        assert!(
            self.contains(x, z),
            "({x}, {z}) outside {}x{} grid",
            self.width,
            self.height
        );
        &self.tiles[x * self.height + z]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
