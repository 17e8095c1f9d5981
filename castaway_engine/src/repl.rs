//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`CastawayWorld`],
//! plus the checks that run after every turn.

pub mod dev;
mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use dev::*;
pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use anyhow::Result;
use log::{info, warn};

use crate::command::{Command, parse_command};
use crate::dev_command::DevCommand;
use crate::world::{CastawayWorld, GameStatus};
use crate::{DEV_MODE, View, ViewItem};

use input::{InputEvent, InputManager};

const PROMPT: &str = "> ";
const QUIT_PROMPT: &str = "Are you sure you want to quit? (y/n): ";

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the session ends.
///
/// Shows the starting room, then prompts, processes and renders one line at a
/// time. Returns when the player quits, wins or dies.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut CastawayWorld) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    world.player_room_mut()?.show(&mut view);
    view.flush();

    while world.is_running() {
        let prompt = if world.status == GameStatus::ConfirmingQuit {
            QUIT_PROMPT
        } else {
            PROMPT
        };

        let input_event = if let Ok(event) = input_manager.read_line(prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
            view.flush();
            continue;
        };

        let line = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                // no more input can arrive, so treat it as a confirmed quit
                world.status = GameStatus::ConfirmingQuit;
                "yes".to_string()
            },
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };

        let control = process_input(world, &mut view, &line)?;
        view.flush();
        if let ReplControl::Quit = control {
            break;
        }
    }
    Ok(())
}

/// Process one line of player input: dispatch it, then run the post-turn checks.
///
/// While a quit is awaiting confirmation the line is taken as the answer instead.
/// Blank lines are ignored.
///
/// # Errors
/// - Propagates handler failures, which only arise from a broken room graph.
pub fn process_input(world: &mut CastawayWorld, view: &mut View, line: &str) -> Result<ReplControl> {
    if world.status == GameStatus::ConfirmingQuit {
        return Ok(confirm_quit_handler(world, view, line));
    }
    if !world.is_running() {
        return Ok(ReplControl::Quit);
    }
    let input = line.trim();
    if input.is_empty() {
        return Ok(ReplControl::Continue);
    }

    world.turn_count += 1;
    info!("================> BEGIN TURN {} <================", world.turn_count);
    let command = parse_command(input);
    info!("player input '{input}' parsed as {command:?}");
    dispatch_command(world, view, command)?;
    run_post_turn_checks(world, view);

    Ok(if world.is_running() {
        ReplControl::Continue
    } else {
        ReplControl::Quit
    })
}

fn dispatch_command(world: &mut CastawayWorld, view: &mut View, command: Command) -> Result<()> {
    match command {
        Command::MoveTo(direction) => move_to_handler(world, view, &direction)?,
        Command::Look => look_handler(world, view)?,
        Command::Examine(thing) => examine_handler(world, view, &thing)?,
        Command::Take(thing) => take_handler(world, view, &thing)?,
        Command::Drop(thing) => drop_handler(world, view, &thing)?,
        Command::UseItem(thing) => use_handler(world, view, &thing)?,
        Command::Inventory => inv_handler(world, view),
        Command::Status => status_handler(world, view),
        Command::Help => help_handler(world, view),
        Command::Score => score_handler(world, view),
        Command::Quit => quit_handler(world),
        Command::MissingTarget(verb) => missing_target_handler(view, &verb),
        Command::Unknown => unknown_handler(view),
        Command::Dev(dev_command) if !DEV_MODE => {
            warn!("player attempted to use developer command '{dev_command:?}' with DEV_MODE = false");
            view.push(ViewItem::ActionFailure(
                "Developer commands are disabled in this build.".to_string(),
            ));
        },
        Command::Dev(DevCommand::Teleport(room_id)) => dev_teleport_handler(world, view, &room_id)?,
        Command::Dev(DevCommand::Damage(amount)) => dev_damage_handler(world, view, &amount),
        Command::Dev(DevCommand::ListFlags) => dev_list_flags_handler(world, view),
    }
    Ok(())
}

/// Checks run after every command, in order: derived flags, win, death.
pub fn run_post_turn_checks(world: &mut CastawayWorld, view: &mut View) {
    world.refresh_flags();
    if world.status != GameStatus::Playing {
        return;
    }
    if check_win(world, view) {
        return;
    }
    check_death(world, view);
}

/// Ends the game in victory if the player holds the finale item in the finale room.
pub fn check_win(world: &mut CastawayWorld, view: &mut View) -> bool {
    if !world.finale_reached() {
        return false;
    }
    let bonus = world.scoring.win_bonus;
    world.award_points(view, bonus, "Escaped the forgotten island");
    world.status = GameStatus::Won;
    info!(
        "{} won in room {} with a final score of {}",
        world.player.name(),
        world.current_room,
        world.score
    );
    view.push(ViewItem::Victory(world.finale.message.clone()));
    push_summary(world, view, "Victory!");
    true
}

/// Ends the game if the player's health has run out.
pub fn check_death(world: &mut CastawayWorld, view: &mut View) -> bool {
    if world.player.is_alive() {
        return false;
    }
    world.status = GameStatus::Died;
    info!("{} died with a score of {}", world.player.name(), world.score);
    view.push(ViewItem::CharacterDeath {
        name: world.player.name.clone(),
        score: world.score,
    });
    push_summary(world, view, "Game Over");
    true
}
