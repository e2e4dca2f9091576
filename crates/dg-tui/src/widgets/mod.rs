//! Viewer widgets

mod map;
mod status;

pub use map::MapWidget;
pub use status::{KEY_HELP, StatusWidget};
