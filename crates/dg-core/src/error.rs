//! Error types for configuration and generation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dungeon::GenerationPhase;

/// Rejected or unreadable dungeon configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("room count must be positive")]
    NoRooms,

    #[error("room size range [{min}, {max}) is empty")]
    DegenerateRoomSize { min: usize, max: usize },

    #[error("room size {min} is below the minimum of {minimum}")]
    RoomTooSmall { min: usize, minimum: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A generation run that cannot produce a grid
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("room {room} has no other room to connect to")]
    NoConnectionCandidate { room: usize },

    #[error("cannot {step} while the generator is {phase}")]
    OutOfOrder {
        step: &'static str,
        phase: GenerationPhase,
    },
}

/// A room slot ran out of placement attempts
///
/// Not fatal: rooms placed before `slot` stay in the grid and the run
/// carries on with them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("no free space for room slot {slot} after {attempts} attempts")]
pub struct PlacementExhausted {
    pub slot: usize,
    pub attempts: u32,
}
