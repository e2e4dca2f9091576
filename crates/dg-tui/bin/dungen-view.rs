//! Interactive dungeon layout viewer
//!
//! Generates a layout and redraws it as seeds and room counts change.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use dg_core::dungeon::Range;
use dg_core::{DungeonConfig, DungeonRng};
use dg_tui::{App, Theme};

/// Browse generated dungeon layouts in the terminal
#[derive(Parser, Debug)]
#[command(name = "dungen-view")]
#[command(author, version, about = "Dungeon layout viewer", long_about = None)]
struct Args {
    /// Grid width
    #[arg(short = 'W', long, default_value_t = 60)]
    width: usize,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = 30)]
    height: usize,

    /// Number of rooms to place
    #[arg(short = 'n', long, default_value_t = 6)]
    rooms: usize,

    /// Smallest room side
    #[arg(long, default_value_t = 4)]
    min_room: usize,

    /// Largest room side, exclusive
    #[arg(long, default_value_t = 10)]
    max_room: usize,

    /// Starting seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Force the light background theme
    #[arg(long)]
    light: bool,

    /// Write logs to this file (the terminal is busy drawing)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = DungeonConfig::default()
        .with_size(args.width, args.height)
        .with_room_count(args.rooms)
        .with_room_size(Range::new(args.min_room, args.max_room));
    if let Err(err) = config.validate() {
        eprintln!("dungen-view: {err}");
        std::process::exit(1);
    }

    let seed = args
        .seed
        .unwrap_or_else(|| DungeonRng::from_entropy().seed());
    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let mut app = App::new(config, seed, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))?
            && let Some(command) = app.handle_event(event::read()?)
        {
            app.execute(command);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
