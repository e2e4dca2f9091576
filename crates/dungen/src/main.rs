//! Dungeon layout generator
//!
//! Generates one layout and prints it to stdout. Logs go to stderr.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dg_core::dungeon::Range;
use dg_core::render::PlacementConvention;
use dg_core::{ConfigError, DungeonConfig, DungeonRng, TILE_UNIT, generate};

use output::{Format, parse_origin};

/// Generate a room-and-corridor dungeon layout
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Room-and-corridor dungeon generator", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Number of rooms to place
    #[arg(short = 'n', long)]
    rooms: Option<usize>,

    /// Smallest room side
    #[arg(long)]
    min_room: Option<usize>,

    /// Largest room side, exclusive
    #[arg(long)]
    max_room: Option<usize>,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// World origin for placements, as x,y,z
    #[arg(long, value_parser = parse_origin, allow_hyphen_values = true)]
    origin: Option<[f32; 3]>,

    /// World units per grid cell for placements
    #[arg(long, default_value_t = TILE_UNIT)]
    unit: f32,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn build_config(&self) -> Result<DungeonConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DungeonConfig::read_from_file(path)?,
            None => DungeonConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(rooms) = self.rooms {
            config.room_count = rooms;
        }
        config.room_size = Range::new(
            self.min_room.unwrap_or(config.room_size.min),
            self.max_room.unwrap_or(config.room_size.max),
        );
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match args.build_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("dungen: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rng = match args.seed {
        Some(seed) => DungeonRng::new(seed),
        None => DungeonRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), format = %args.format, "generating");

    let dungeon = match generate(config, rng) {
        Ok(dungeon) => dungeon,
        Err(err) => {
            eprintln!("dungen: {err}");
            return ExitCode::FAILURE;
        }
    };
    if dungeon.is_partial() {
        eprintln!(
            "dungen: warning: placed {} of {} rooms (seed {})",
            dungeon.outcome.placed(),
            dungeon.config.room_count,
            dungeon.seed
        );
    }

    let convention = PlacementConvention::new(args.origin.unwrap_or([0.0; 3]), args.unit);
    match output::render(&dungeon, args.format, &convention) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("dungen: {err}");
            ExitCode::FAILURE
        }
    }
}
