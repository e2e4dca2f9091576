//! dg-tui: Terminal viewer for dungeon layouts
//!
//! Draws generated grids with ratatui and lets the user reroll them.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use input::ViewerCommand;
pub use theme::Theme;
