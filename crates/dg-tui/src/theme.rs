//! Terminal color theme
//!
//! Dark and light palettes, picked from the COLORFGBG env var or forced
//! with DUNGEN_LIGHT_BG=1.

use ratatui::style::Color;

use dg_core::dungeon::TileKind;

/// Color theme for the viewer
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (key help)
    pub text_dim: Color,
    pub border: Color,
    /// Status line warnings (partial layouts, errors)
    pub bad: Color,

    pub map_empty: Color,
    pub map_floor: Color,
    pub map_wall: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            bad: Color::Red,
            map_empty: Color::Black,
            map_floor: Color::White,
            map_wall: Color::Gray,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            bad: Color::Red,
            map_empty: Color::White,
            map_floor: Color::Black,
            map_wall: Color::DarkGray,
        }
    }

    /// Auto-detect terminal background and return appropriate theme
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground color for a tile
    pub fn tile_color(&self, kind: TileKind) -> Color {
        match kind {
            TileKind::Empty => self.map_empty,
            TileKind::Floor => self.map_floor,
            TileKind::Wall => self.map_wall,
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("DUNGEN_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices 0-15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
