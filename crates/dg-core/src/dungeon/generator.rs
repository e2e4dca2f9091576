//! Dungeon generation pipeline
//!
//! One [`DungeonGenerator`] runs one layout from start to finish:
//!
//! 1. allocate the grid
//! 2. place rooms one slot at a time, redrawing rejected candidates
//! 3. pair every room with its closest unconnected room and carve a corridor
//! 4. hand the finished [`Dungeon`] over
//!
//! Steps must run in that order; the generator tracks its
//! [`GenerationPhase`] and refuses anything else.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::corridor::{Corridor, carve_corridor};
use super::{Grid, Range, Room};
use crate::config::DungeonConfig;
use crate::consts::MAX_PLACEMENT_RETRIES;
use crate::error::{GenerationError, PlacementExhausted};
use crate::rng::DungeonRng;

/// Where a generator is in its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GenerationPhase {
    Uninitialized,
    GridReady,
    RoomsPlaced,
    Connected,
    Finalized,
}

/// Result of the room placement pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// Every slot received a room
    Complete { placed: usize },
    /// A slot ran out of attempts; later slots were never tried
    Exhausted {
        placed: usize,
        requested: usize,
        cause: PlacementExhausted,
    },
}

impl PlacementOutcome {
    /// Number of rooms stamped into the grid
    pub fn placed(&self) -> usize {
        match self {
            PlacementOutcome::Complete { placed } | PlacementOutcome::Exhausted { placed, .. } => {
                *placed
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PlacementOutcome::Complete { .. })
    }
}

/// A finished layout
#[derive(Debug, Clone, Serialize)]
pub struct Dungeon {
    /// Seed of the RNG that produced this layout
    pub seed: u64,
    pub config: DungeonConfig,
    pub grid: Grid,
    /// Placed rooms in slot order
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub outcome: PlacementOutcome,
}

impl Dungeon {
    /// Check if fewer rooms were placed than requested
    pub fn is_partial(&self) -> bool {
        !self.outcome.is_complete()
    }
}

/// Generate a dungeon in one call
pub fn generate(config: DungeonConfig, rng: DungeonRng) -> Result<Dungeon, GenerationError> {
    DungeonGenerator::new(config, rng)?.run()
}

/// Step-by-step layout generator owning its grid, rooms and RNG
#[derive(Debug)]
pub struct DungeonGenerator {
    config: DungeonConfig,
    rng: DungeonRng,
    phase: GenerationPhase,
    grid: Option<Grid>,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    outcome: Option<PlacementOutcome>,
}

impl DungeonGenerator {
    /// Validate the configuration and set up an idle generator
    pub fn new(config: DungeonConfig, rng: DungeonRng) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            rooms: Vec::with_capacity(config.room_count),
            config,
            rng,
            phase: GenerationPhase::Uninitialized,
            grid: None,
            corridors: Vec::new(),
            outcome: None,
        })
    }

    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// The grid, once allocated
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Rooms placed so far
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Run every remaining step and return the finished dungeon
    pub fn run(mut self) -> Result<Dungeon, GenerationError> {
        self.init_grid()?;
        self.place_rooms()?;
        self.connect_rooms()?;
        self.finish()
    }

    fn expect_phase(
        &self,
        expected: GenerationPhase,
        step: &'static str,
    ) -> Result<(), GenerationError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GenerationError::OutOfOrder {
                step,
                phase: self.phase,
            })
        }
    }

    /// Allocate the empty grid
    pub fn init_grid(&mut self) -> Result<(), GenerationError> {
        self.expect_phase(GenerationPhase::Uninitialized, "initialize the grid")?;
        self.grid = Some(Grid::new(self.config.width, self.config.height)?);
        self.phase = GenerationPhase::GridReady;
        Ok(())
    }

    /// Fill room slots in order until all are placed or one runs out of attempts
    pub fn place_rooms(&mut self) -> Result<PlacementOutcome, GenerationError> {
        self.expect_phase(GenerationPhase::GridReady, "place rooms")?;
        let Some(grid) = self.grid.as_mut() else {
            return Err(GenerationError::OutOfOrder {
                step: "place rooms",
                phase: self.phase,
            });
        };

        let position_x = Range::new(0, self.config.width);
        let position_z = Range::new(0, self.config.height);
        let requested = self.config.room_count;

        let mut outcome = PlacementOutcome::Complete { placed: requested };
        for slot in 0..requested {
            match place_slot(
                grid,
                &mut self.rng,
                position_x,
                position_z,
                self.config.room_size,
                slot,
            ) {
                Ok(room) => {
                    tracing::debug!(
                        slot,
                        x = room.x,
                        z = room.z,
                        size_x = room.size_x,
                        size_z = room.size_z,
                        "room placed"
                    );
                    self.rooms.push(room);
                }
                Err(cause) => {
                    tracing::warn!(
                        %cause,
                        placed = self.rooms.len(),
                        requested,
                        "room placement stopped early"
                    );
                    outcome = PlacementOutcome::Exhausted {
                        placed: self.rooms.len(),
                        requested,
                        cause,
                    };
                    break;
                }
            }
        }

        tracing::info!(placed = outcome.placed(), requested, "room placement finished");
        self.outcome = Some(outcome);
        self.phase = GenerationPhase::RoomsPlaced;
        Ok(outcome)
    }

    /// Join each room to its closest unconnected room
    ///
    /// A single-room config is always fatal. Otherwise a room with no other
    /// room to pair with is fatal after a complete placement pass, and
    /// skipped after an exhausted one, since the missing partners are
    /// exactly the slots that never got a room.
    pub fn connect_rooms(&mut self) -> Result<&[Corridor], GenerationError> {
        self.expect_phase(GenerationPhase::RoomsPlaced, "connect rooms")?;
        let (Some(grid), Some(outcome)) = (self.grid.as_mut(), self.outcome) else {
            return Err(GenerationError::OutOfOrder {
                step: "connect rooms",
                phase: self.phase,
            });
        };

        // a lone room never has a partner, placed or not
        if self.config.room_count < 2 {
            return Err(GenerationError::NoConnectionCandidate { room: 0 });
        }

        for index in 0..self.rooms.len() {
            match Room::closest_unconnected(&mut self.rooms, index) {
                Ok(Some(target)) => {
                    let from = self.rooms[index].center();
                    let to = self.rooms[target].center();
                    carve_corridor(grid, from, to);
                    tracing::debug!(source = index, target, ?from, ?to, "corridor carved");
                    self.corridors.push(Corridor {
                        from: index,
                        to: target,
                    });
                }
                Ok(None) => {
                    tracing::debug!(room = index, "no unconnected room left to pair with");
                }
                Err(err) if !outcome.is_complete() => {
                    tracing::warn!(%err, "skipping connection in partial dungeon");
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(corridors = self.corridors.len(), "room connection finished");
        self.phase = GenerationPhase::Connected;
        Ok(&self.corridors)
    }

    /// Hand over the finished dungeon
    pub fn finish(mut self) -> Result<Dungeon, GenerationError> {
        self.expect_phase(GenerationPhase::Connected, "finish")?;
        let (Some(grid), Some(outcome)) = (self.grid.take(), self.outcome) else {
            return Err(GenerationError::OutOfOrder {
                step: "finish",
                phase: self.phase,
            });
        };
        self.phase = GenerationPhase::Finalized;
        Ok(Dungeon {
            seed: self.rng.seed(),
            config: self.config,
            grid,
            rooms: self.rooms,
            corridors: self.corridors,
            outcome,
        })
    }
}

/// Draw candidates for one slot until one fits or the retries run out
fn place_slot(
    grid: &mut Grid,
    rng: &mut DungeonRng,
    position_x: Range,
    position_z: Range,
    size: Range,
    slot: usize,
) -> Result<Room, PlacementExhausted> {
    let mut attempts = 1;
    let mut room = Room::random(position_x, position_z, size, rng);
    while !room.can_place(grid) {
        tracing::debug!(slot, attempts, x = room.x, z = room.z, "candidate rejected");
        if attempts > MAX_PLACEMENT_RETRIES {
            return Err(PlacementExhausted { slot, attempts });
        }
        room = Room::random(position_x, position_z, size, rng);
        attempts += 1;
    }
    room.place(grid);
    Ok(room)
}
