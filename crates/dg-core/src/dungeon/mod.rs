//! Dungeon layout
//!
//! Contains tiles, the grid, rooms, corridors and the generator that
//! ties them together.

mod corridor;
mod generator;
mod grid;
mod range;
mod room;
mod tile;

pub use corridor::{Axis, Corridor, carve_corridor, infer_walls};
pub use generator::{Dungeon, DungeonGenerator, GenerationPhase, PlacementOutcome, generate};
pub use grid::Grid;
pub use range::Range;
pub use room::Room;
pub use tile::TileKind;
