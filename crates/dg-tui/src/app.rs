//! Application state and main UI controller

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use dg_core::{Dungeon, DungeonConfig, DungeonRng, GenerationError, generate};

use crate::input::{ViewerCommand, key_to_command};
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// Viewer state: the current configuration, seed and generated layout
pub struct App {
    config: DungeonConfig,
    seed: u64,
    result: Result<Dungeon, GenerationError>,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(config: DungeonConfig, seed: u64, theme: Theme) -> Self {
        let result = generate(config.clone(), DungeonRng::new(seed));
        Self {
            config,
            seed,
            result,
            theme,
            should_quit: false,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn result(&self) -> &Result<Dungeon, GenerationError> {
        &self.result
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event; only key presses produce commands
    pub fn handle_event(&self, event: Event) -> Option<ViewerCommand> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_command(key),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Reroll => self.seed = DungeonRng::from_entropy().seed(),
            ViewerCommand::NextSeed => self.seed = self.seed.wrapping_add(1),
            ViewerCommand::PreviousSeed => self.seed = self.seed.wrapping_sub(1),
            ViewerCommand::MoreRooms => self.config.room_count += 1,
            ViewerCommand::FewerRooms => {
                self.config.room_count = self.config.room_count.saturating_sub(1).max(1)
            }
            ViewerCommand::Quit => {
                self.should_quit = true;
                return;
            }
        }
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.result = generate(self.config.clone(), DungeonRng::new(self.seed));
        match &self.result {
            Ok(dungeon) => tracing::debug!(
                seed = self.seed,
                rooms = dungeon.rooms.len(),
                corridors = dungeon.corridors.len(),
                "regenerated"
            ),
            Err(err) => tracing::warn!(seed = self.seed, %err, "generation failed"),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(frame.area());

        if let Ok(dungeon) = &self.result {
            frame.render_widget(MapWidget::new(&dungeon.grid, &self.theme), chunks[0]);
        }
        frame.render_widget(
            StatusWidget::new(self.seed, &self.result, &self.theme),
            chunks[1],
        );
    }
}
