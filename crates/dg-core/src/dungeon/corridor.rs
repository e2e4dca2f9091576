//! Corridor carving and wall inference
//!
//! Corridors run from one room center to another as an L: first along x
//! at the source row, then along z at the destination column. Each carved
//! cell turns to floor and walls go up on both sides of the run.

use serde::{Deserialize, Serialize};

use super::{Grid, TileKind};

/// Direction of a straight corridor run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along x; walls go at z-1 and z+1
    Horizontal,
    /// Along z; walls go at x-1 and x+1
    Vertical,
}

/// A carved corridor between two rooms, by room index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub from: usize,
    pub to: usize,
}

/// Inclusive walk from `from` to `to`, in either direction
fn span(from: usize, to: usize) -> impl Iterator<Item = usize> {
    let forward = to >= from;
    (0..=from.abs_diff(to)).map(move |i| if forward { from + i } else { from - i })
}

/// Carve an L-shaped corridor between two points
///
/// Floor overwrites whatever was there, room walls included.
pub fn carve_corridor(grid: &mut Grid, from: (usize, usize), to: (usize, usize)) {
    let (ax, az) = from;
    let (bx, bz) = to;

    for x in span(ax, bx) {
        grid.set(x, az, TileKind::Floor);
        infer_walls(grid, x, az, Axis::Horizontal);
    }
    for z in span(az, bz) {
        grid.set(bx, z, TileKind::Floor);
        infer_walls(grid, bx, z, Axis::Vertical);
    }
}

/// Wall off both sides of a freshly carved cell
///
/// Neighbours outside the grid are skipped and floor is never replaced.
pub fn infer_walls(grid: &mut Grid, x: usize, z: usize, axis: Axis) {
    match axis {
        Axis::Horizontal => {
            grid.mark_wall(x, z + 1);
            if let Some(below) = z.checked_sub(1) {
                grid.mark_wall(x, below);
            }
        }
        Axis::Vertical => {
            grid.mark_wall(x + 1, z);
            if let Some(left) = x.checked_sub(1) {
                grid.mark_wall(left, z);
            }
        }
    }
}
