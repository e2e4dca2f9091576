//! Input handling - convert key events to viewer commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the viewer can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Generate again with a fresh random seed
    Reroll,
    NextSeed,
    PreviousSeed,
    MoreRooms,
    FewerRooms,
    Quit,
}

/// Convert a key event to a viewer command
pub fn key_to_command(key: KeyEvent) -> Option<ViewerCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(ViewerCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('r') => Some(ViewerCommand::Reroll),
        KeyCode::Char('n') | KeyCode::Right => Some(ViewerCommand::NextSeed),
        KeyCode::Char('p') | KeyCode::Left => Some(ViewerCommand::PreviousSeed),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(ViewerCommand::MoreRooms),
        KeyCode::Char('-') | KeyCode::Down => Some(ViewerCommand::FewerRooms),
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewerCommand::Quit),
        _ => None,
    }
}
