//! Generation configuration
//!
//! Handles defaults, validation and JSON config file loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_HEIGHT, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_WIDTH,
    MIN_ROOM_SIDE,
};
use crate::dungeon::Range;
use crate::error::ConfigError;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Grid extent along x
    pub width: usize,
    /// Grid extent along z
    pub height: usize,
    /// Number of room slots to fill
    pub room_count: usize,
    /// Side length range for rooms, drawn per axis
    pub room_size: Range,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            room_size: Range::new(DEFAULT_ROOM_MIN, DEFAULT_ROOM_MAX),
        }
    }
}

impl DungeonConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_room_count(mut self, room_count: usize) -> Self {
        self.room_count = room_count;
        self
    }

    pub fn with_room_size(mut self, room_size: Range) -> Self {
        self.room_size = room_size;
        self
    }

    /// Reject configurations that cannot produce a sensible layout
    ///
    /// Rooms need a side of at least 3 to hold any floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.room_count == 0 {
            return Err(ConfigError::NoRooms);
        }
        if self.room_size.is_empty() {
            return Err(ConfigError::DegenerateRoomSize {
                min: self.room_size.min,
                max: self.room_size.max,
            });
        }
        if self.room_size.min < MIN_ROOM_SIDE {
            return Err(ConfigError::RoomTooSmall {
                min: self.room_size.min,
                minimum: MIN_ROOM_SIDE,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file without validating it
    ///
    /// For callers that override fields before calling [`Self::validate`].
    pub fn read_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn parse_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
