//! Map tile kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a single grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Empty = 0,
    Floor = 1,
    Wall = 2,
}

impl TileKind {
    /// Check if anything should be drawn for this tile
    pub const fn is_solid(&self) -> bool {
        !matches!(self, TileKind::Empty)
    }

    /// Check if this is walkable floor
    pub const fn is_floor(&self) -> bool {
        matches!(self, TileKind::Floor)
    }

    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, TileKind::Wall)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Empty => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(TileKind::default(), TileKind::Empty);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = TileKind::iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, vec![' ', '.', '#']);
    }

    #[test]
    fn test_only_empty_is_not_solid() {
        for kind in TileKind::iter() {
            assert_eq!(kind.is_solid(), kind != TileKind::Empty);
        }
    }
}
