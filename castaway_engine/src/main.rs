#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Castaway **
//! Journey of the Forgotten Island

use std::io::{self, Write};

use anyhow::{Context, Result};
use castaway_engine::style::GameStyle;
use castaway_engine::{CASTAWAY_VERSION, load_world, run_repl};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Castaway world (v{CASTAWAY_VERSION})...");
    let mut world = load_world().context("while loading CastawayWorld")?;
    info!("CastawayWorld loaded successfully.");

    println!("{:^60}", world.title.to_uppercase().bright_yellow().underline());
    for line in &world.tagline {
        println!("{:^60}", line.italic());
    }
    println!("\n{}\n", world.intro.description_style());

    let name = ask_name().context("while reading the player's name")?;
    if !name.is_empty() {
        world.player.name = name;
    }
    info!("player name set to \"{}\"", world.player.name());
    println!(
        "\nWelcome, {}! Your adventure begins...\n",
        world.player.name().player_style()
    );

    info!("Starting the game!");
    run_repl(&mut world)
}

/// Prompt for a player name; an empty answer (or EOF) keeps the default.
fn ask_name() -> Result<String> {
    print!("{}", "Enter your name, brave adventurer: ".prompt_style());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
