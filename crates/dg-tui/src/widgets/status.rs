//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use dg_core::{Dungeon, GenerationError};

use crate::theme::Theme;

pub const KEY_HELP: &str = "r:reroll  n/p:next/prev seed  +/-:rooms  q:quit";

/// Widget for rendering the seed, room counts and key help
pub struct StatusWidget<'a> {
    seed: u64,
    result: &'a Result<Dungeon, GenerationError>,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(seed: u64, result: &'a Result<Dungeon, GenerationError>, theme: &'a Theme) -> Self {
        Self {
            seed,
            result,
            theme,
        }
    }

    /// Summary text for the first status line
    pub fn summary(&self) -> String {
        match self.result {
            Ok(dungeon) => {
                let mut line = format!(
                    "Seed:{} Grid:{}x{} Rooms:{}/{} Corridors:{}",
                    self.seed,
                    dungeon.grid.width(),
                    dungeon.grid.height(),
                    dungeon.outcome.placed(),
                    dungeon.config.room_count,
                    dungeon.corridors.len(),
                );
                if dungeon.is_partial() {
                    line.push_str(" (partial)");
                }
                line
            }
            Err(err) => format!("Seed:{} Error: {}", self.seed, err),
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let healthy = matches!(self.result, Ok(dungeon) if !dungeon.is_partial());
        let color = if healthy { self.theme.text } else { self.theme.bad };

        buf.set_string(area.x, area.y, self.summary(), Style::default().fg(color));
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                KEY_HELP,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
