//! Output formats for a generated dungeon

use std::fmt::Write;

use clap::ValueEnum;
use strum::Display;

use dg_core::Dungeon;
use dg_core::render::PlacementConvention;

/// How to print the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// One character per tile, top row first
    #[default]
    Ascii,
    /// The full dungeon (grid, rooms, corridors, outcome) as JSON
    Json,
    /// One line per non-empty tile with its world position
    Placements,
}

pub fn render(
    dungeon: &Dungeon,
    format: Format,
    convention: &PlacementConvention,
) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Ascii => dungeon.grid.to_string(),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(dungeon)?;
            json.push('\n');
            json
        }
        Format::Placements => placements(dungeon, convention),
    })
}

/// Tab-separated `kind x z world_x world_y world_z` lines
fn placements(dungeon: &Dungeon, convention: &PlacementConvention) -> String {
    let mut out = String::new();
    for placement in convention.placements(&dungeon.grid) {
        let (x, z) = placement.cell;
        let [wx, wy, wz] = placement.world;
        // writing to a String cannot fail
        let _ = writeln!(out, "{}\t{x}\t{z}\t{wx}\t{wy}\t{wz}", placement.kind);
    }
    out
}

/// Parse an `x,y,z` origin
pub fn parse_origin(s: &str) -> Result<[f32; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got '{s}'"));
    };
    let parse = |v: &str| {
        v.parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok([parse(x)?, parse(y)?, parse(z)?])
}
