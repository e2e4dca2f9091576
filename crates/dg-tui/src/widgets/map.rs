//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use dg_core::dungeon::Grid;

use crate::theme::Theme;

/// Widget for rendering a dungeon grid
///
/// The top screen row shows the highest z; grids larger than the area are
/// clipped on the right and bottom.
pub struct MapWidget<'a> {
    grid: &'a Grid,
    theme: &'a Theme,
    title: &'a str,
}

impl<'a> MapWidget<'a> {
    pub fn new(grid: &'a Grid, theme: &'a Theme) -> Self {
        Self {
            grid,
            theme,
            title: "Dungeon",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(self.title);

        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.grid.height().min(inner.height as usize);
        let cols = self.grid.width().min(inner.width as usize);
        for row in 0..rows {
            let z = self.grid.height() - 1 - row;
            for x in 0..cols {
                let Some(kind) = self.grid.get(x, z) else {
                    continue;
                };
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + row as u16))
                {
                    cell.set_char(kind.symbol());
                    cell.set_style(Style::default().fg(self.theme.tile_color(kind)));
                }
            }
        }
    }
}
