//! dg-core: Dungeon layout generation
//!
//! Places walled rectangular rooms on a bounded grid, joins them with
//! L-shaped corridors and infers the walls around those corridors.
//! The crate has no I/O beyond optional config file loading; drawing the
//! finished grid is left to consumers (see [`render`]).

pub mod config;
pub mod dungeon;
pub mod error;
pub mod render;

mod consts;
mod rng;

pub use config::DungeonConfig;
pub use consts::*;
pub use dungeon::{Dungeon, DungeonGenerator, GenerationPhase, generate};
pub use error::{ConfigError, GenerationError, PlacementExhausted};
pub use rng::DungeonRng;
