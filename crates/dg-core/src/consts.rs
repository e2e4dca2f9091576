//! Generation constants
//!
//! Defaults match the stock generator component: a 10x10 map holding four
//! rooms whose sides are drawn from `[4, 10)`.

/// Default map dimensions
pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Default number of room slots
pub const DEFAULT_ROOM_COUNT: usize = 4;

/// Default room side range, max exclusive
pub const DEFAULT_ROOM_MIN: usize = 4;
pub const DEFAULT_ROOM_MAX: usize = 10;

/// Default side of a room built without explicit size
pub const DEFAULT_ROOM_SIDE: usize = 4;

/// Smallest room side that still has a floor cell inside its walls
pub const MIN_ROOM_SIDE: usize = 3;

/// Extra candidates drawn for a room slot after the first one is rejected
pub const MAX_PLACEMENT_RETRIES: u32 = 5;

/// World units per grid cell on each horizontal axis
pub const TILE_UNIT: f32 = 2.0;
