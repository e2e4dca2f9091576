//! Rectangular rooms
//!
//! A room carries its own walled interior and stamps it into the grid once
//! placement has been validated. Rooms smaller than 3 on a side have no
//! floor: every cell lands on the border and becomes wall.

use serde::Serialize;

use super::{Grid, Range, TileKind};
use crate::consts::DEFAULT_ROOM_SIDE;
use crate::error::GenerationError;
use crate::rng::DungeonRng;

/// A walled rectangle on the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// X coordinate of the lower-left corner
    pub x: usize,
    /// Z coordinate of the lower-left corner
    pub z: usize,
    /// Extent along x, walls included
    pub size_x: usize,
    /// Extent along z, walls included
    pub size_z: usize,
    /// Already used as the source end of a corridor
    pub connected: bool,
    #[serde(skip)]
    interior: Vec<TileKind>,
}

impl Room {
    /// Create a room and build its interior
    pub fn new(x: usize, z: usize, size_x: usize, size_z: usize) -> Self {
        let interior = (0..size_x)
            .flat_map(|i| {
                (0..size_z).map(move |j| {
                    if i == 0 || i + 1 == size_x || j == 0 || j + 1 == size_z {
                        TileKind::Wall
                    } else {
                        TileKind::Floor
                    }
                })
            })
            .collect();
        Self {
            x,
            z,
            size_x,
            size_z,
            connected: false,
            interior,
        }
    }

    /// Create a room of the default 4x4 size
    pub fn with_default_size(x: usize, z: usize) -> Self {
        Self::new(x, z, DEFAULT_ROOM_SIDE, DEFAULT_ROOM_SIDE)
    }

    /// Draw a random candidate room
    ///
    /// Draw order is x, z, then the two sides, so a seed always maps to
    /// the same sequence of candidates.
    pub fn random(pos_x: Range, pos_z: Range, size: Range, rng: &mut DungeonRng) -> Self {
        let x = pos_x.next(rng);
        let z = pos_z.next(rng);
        let size_x = size.next(rng);
        let size_z = size.next(rng);
        Self::new(x, z, size_x, size_z)
    }

    pub fn left(&self) -> usize {
        self.x
    }

    pub fn right(&self) -> usize {
        self.x + self.size_x
    }

    pub fn bottom(&self) -> usize {
        self.z
    }

    pub fn top(&self) -> usize {
        self.z + self.size_z
    }

    /// Get center point of room (integer division)
    pub fn center(&self) -> (usize, usize) {
        (self.left() + self.size_x / 2, self.bottom() + self.size_z / 2)
    }

    /// Check if a grid coordinate is covered by this room
    pub fn contains(&self, x: usize, z: usize) -> bool {
        x >= self.left() && x < self.right() && z >= self.bottom() && z < self.top()
    }

    /// Interior tile at room-local `(i, j)`
    pub fn tile(&self, i: usize, j: usize) -> Option<TileKind> {
        (i < self.size_x && j < self.size_z).then(|| self.interior[i * self.size_z + j])
    }

    /// Euclidean distance between the two room centers
    pub fn distance_to(&self, other: &Room) -> f64 {
        let (ax, az) = self.center();
        let (bx, bz) = other.center();
        let dx = ax as f64 - bx as f64;
        let dz = az as f64 - bz as f64;
        (dx * dx + dz * dz).sqrt()
    }

    /// Check if the room can be stamped into the grid
    ///
    /// Every covered cell must be empty and stay clear of the last column
    /// and last row, which are never used by rooms.
    pub fn can_place(&self, grid: &Grid) -> bool {
        for i in 0..self.size_x {
            for j in 0..self.size_z {
                let gx = self.x + i;
                let gz = self.z + j;
                if gx + 1 >= grid.width() || gz + 1 >= grid.height() {
                    return false;
                }
                if grid.get(gx, gz) != Some(TileKind::Empty) {
                    return false;
                }
            }
        }
        true
    }

    /// Copy the interior into the grid, overwriting what is there
    ///
    /// Call [`Room::can_place`] first; nothing is re-checked here.
    pub fn place(&self, grid: &mut Grid) {
        for i in 0..self.size_x {
            for j in 0..self.size_z {
                grid.set(self.x + i, self.z + j, self.interior[i * self.size_z + j]);
            }
        }
    }

    /// Pick the nearest room that has not been a corridor source yet
    ///
    /// Marks `rooms[index]` as connected. Ties go to the lowest index.
    /// Returns `Ok(None)` when every other room is already connected and
    /// an error when `rooms[index]` has no other room at all.
    pub fn closest_unconnected(
        rooms: &mut [Room],
        index: usize,
    ) -> Result<Option<usize>, GenerationError> {
        if index >= rooms.len() || rooms.len() < 2 {
            return Err(GenerationError::NoConnectionCandidate { room: index });
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in rooms.iter().enumerate() {
            if i == index || candidate.connected {
                continue;
            }
            let distance = rooms[index].distance_to(candidate);
            match best {
                Some((_, best_distance)) if best_distance - distance <= 0.0 => {}
                _ => best = Some((i, distance)),
            }
        }

        rooms[index].connected = true;
        Ok(best.map(|(i, _)| i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_layout() {
        let room = Room::new(0, 0, 4, 5);
        for i in 0..4 {
            for j in 0..5 {
                let border = i == 0 || i == 3 || j == 0 || j == 4;
                let expected = if border { TileKind::Wall } else { TileKind::Floor };
                assert_eq!(room.tile(i, j), Some(expected), "cell ({i}, {j})");
            }
        }
        assert_eq!(room.tile(4, 0), None);
    }

    #[test]
    fn test_small_rooms_are_all_wall() {
        for (sx, sz) in [(1, 1), (2, 2), (2, 6), (6, 1)] {
            let room = Room::new(0, 0, sx, sz);
            for i in 0..sx {
                for j in 0..sz {
                    assert_eq!(room.tile(i, j), Some(TileKind::Wall));
                }
            }
        }
    }

    #[test]
    fn test_geometry() {
        let room = Room::new(3, 2, 5, 4);
        assert_eq!(room.left(), 3);
        assert_eq!(room.right(), 8);
        assert_eq!(room.bottom(), 2);
        assert_eq!(room.top(), 6);
        assert_eq!(room.center(), (5, 4));
        assert!(room.contains(7, 5));
        assert!(!room.contains(8, 5));
    }

    #[test]
    fn test_default_size() {
        let room = Room::with_default_size(1, 1);
        assert_eq!((room.size_x, room.size_z), (4, 4));
        assert!(!room.connected);
    }

    #[test]
    fn test_can_place_respects_margin() {
        let grid = Grid::new(10, 10).unwrap();
        // last used column/row is 8
        assert!(Room::new(5, 5, 4, 4).can_place(&grid));
        assert!(!Room::new(6, 5, 4, 4).can_place(&grid));
        assert!(!Room::new(5, 6, 4, 4).can_place(&grid));
        assert!(!Room::new(20, 0, 4, 4).can_place(&grid));
    }

    #[test]
    fn test_can_place_rejects_occupied() {
        let mut grid = Grid::new(12, 12).unwrap();
        let first = Room::new(1, 1, 4, 4);
        first.place(&mut grid);
        assert!(!Room::new(4, 4, 4, 4).can_place(&grid));
        assert!(Room::new(5, 5, 4, 4).can_place(&grid));
    }

    #[test]
    fn test_place_copies_interior() {
        let mut grid = Grid::new(10, 10).unwrap();
        let room = Room::new(2, 3, 4, 4);
        room.place(&mut grid);
        assert_eq!(grid.count(TileKind::Floor), 4);
        assert_eq!(grid.count(TileKind::Wall), 12);
        assert_eq!(grid[(3, 4)], TileKind::Floor);
        assert_eq!(grid[(2, 3)], TileKind::Wall);
    }

    #[test]
    fn test_closest_unconnected_picks_nearest() {
        let mut rooms = vec![
            Room::new(0, 0, 4, 4),
            Room::new(20, 20, 4, 4),
            Room::new(6, 0, 4, 4),
        ];
        assert_eq!(Room::closest_unconnected(&mut rooms, 0).unwrap(), Some(2));
        assert!(rooms[0].connected);
        assert!(!rooms[2].connected);
    }

    #[test]
    fn test_closest_unconnected_skips_connected() {
        let mut rooms = vec![
            Room::new(0, 0, 4, 4),
            Room::new(5, 0, 4, 4),
            Room::new(30, 0, 4, 4),
        ];
        rooms[1].connected = true;
        // room 1 is closer but already a source
        assert_eq!(Room::closest_unconnected(&mut rooms, 0).unwrap(), Some(2));
    }

    #[test]
    fn test_closest_unconnected_tie_goes_to_first() {
        let mut rooms = vec![
            Room::new(10, 10, 4, 4),
            Room::new(4, 10, 4, 4),
            Room::new(16, 10, 4, 4),
        ];
        assert_eq!(Room::closest_unconnected(&mut rooms, 0).unwrap(), Some(1));
    }

    #[test]
    fn test_closest_unconnected_all_connected() {
        let mut rooms = vec![Room::new(0, 0, 4, 4), Room::new(5, 0, 4, 4)];
        rooms[0].connected = true;
        assert_eq!(Room::closest_unconnected(&mut rooms, 1).unwrap(), None);
        assert!(rooms[1].connected);
    }

    #[test]
    fn test_closest_unconnected_single_room() {
        let mut rooms = vec![Room::new(0, 0, 4, 4)];
        assert!(matches!(
            Room::closest_unconnected(&mut rooms, 0),
            Err(GenerationError::NoConnectionCandidate { room: 0 })
        ));
    }
}
