//! World placement of grid tiles
//!
//! Consumers that build visuals from a grid put one object per non-empty
//! cell at `origin + unit * (x, 0, z)`. The stock convention uses a unit
//! of 2 on both horizontal axes and keeps the origin's height.

use serde::{Deserialize, Serialize};

use crate::consts::TILE_UNIT;
use crate::dungeon::{Grid, TileKind};

/// Mapping from grid cells to world positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementConvention {
    pub origin: [f32; 3],
    pub unit: f32,
}

impl Default for PlacementConvention {
    fn default() -> Self {
        Self {
            origin: [0.0; 3],
            unit: TILE_UNIT,
        }
    }
}

/// One visual to spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub kind: TileKind,
    /// Grid coordinate `(x, z)`
    pub cell: (usize, usize),
    pub world: [f32; 3],
}

impl PlacementConvention {
    pub fn new(origin: [f32; 3], unit: f32) -> Self {
        Self { origin, unit }
    }

    /// World position of a grid cell
    pub fn world_position(&self, x: usize, z: usize) -> [f32; 3] {
        [
            self.origin[0] + self.unit * x as f32,
            self.origin[1],
            self.origin[2] + self.unit * z as f32,
        ]
    }

    /// Placements for every non-empty cell, x-major then z
    pub fn placements<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = TilePlacement> + 'a {
        grid.iter()
            .filter(|(_, _, kind)| kind.is_solid())
            .map(|(x, z, kind)| TilePlacement {
                kind,
                cell: (x, z),
                world: self.world_position(x, z),
            })
    }
}
