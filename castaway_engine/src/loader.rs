//! Loader utilities for building a `CastawayWorld` from serialized data.
//!
//! World content is loaded from the `WorldDef` (RON), while help metadata
//! remains TOML-backed.

pub mod help;
pub mod worlddef;

use std::path::Path;

use anyhow::{Context, Result, bail};
use castaway_data::WorldDef;
use log::info;

use crate::CastawayWorld;
use crate::data_paths::data_path;
use crate::loader::help::load_help_data;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};

/// Load the `CastawayWorld` from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation failures.
pub fn load_world() -> Result<CastawayWorld> {
    load_world_from(&data_path("world.ron"))
}

/// Load, validate and build a world from a specific RON file, with help from the data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation failures.
pub fn load_world_from(world_ron_path: &Path) -> Result<CastawayWorld> {
    let worlddef = load_worlddef(world_ron_path).context("while loading worlddef from file")?;
    validate_worlddef(&worlddef)?;
    let mut world = build_world_from_def(&worlddef).context("while building world from worlddef")?;
    info!("{} rooms added to CastawayWorld", world.rooms.len());

    world.help = load_help_data(&data_path("help_basic.txt"), &data_path("help_commands.toml"))
        .context("while loading help data")?;
    info!("{} help commands loaded", world.help.commands.len());

    info!(
        "player \"{}\" added to CastawayWorld at room {}",
        world.player.name(),
        world.current_room
    );
    Ok(world)
}

/// Validate the `WorldDef` and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = castaway_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
