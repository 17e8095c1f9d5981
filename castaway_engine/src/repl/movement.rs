//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use anyhow::{Result, anyhow};
use log::info;

use crate::room::Admission;
use crate::{CastawayWorld, View, ViewItem};

/// Move the player through an exit of the current room, honoring any lock on the destination.
///
/// # Errors
/// - if the current room is missing, or the exit leads to a room that doesn't exist
pub fn move_to_handler(world: &mut CastawayWorld, view: &mut View, direction: &str) -> Result<()> {
    let leaving_id = world.current_room;
    let Some(destination_id) = world.player_room_ref()?.resolve_exit(direction) else {
        view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
        info!("{} tried to go {direction} from room {leaving_id}: no exit", world.player.name());
        return Ok(());
    };

    let destination = world
        .rooms
        .get_mut(&destination_id)
        .ok_or_else(|| anyhow!("exit '{direction}' of room {leaving_id} leads to missing room {destination_id}"))?;

    match destination.admit(&world.player) {
        Admission::Open => {},
        Admission::Unlocked { key } => {
            info!(
                "{} unlocked {} ({destination_id}) with the {key}",
                world.player.name(),
                destination.name
            );
            view.push(ViewItem::ActionSuccess(format!("You use the {key} to unlock the way.")));
        },
        Admission::Barred { key } => {
            let message = match key {
                Some(key) => format!("The way is locked. You need a {key} to proceed."),
                None => "The way is locked.".to_string(),
            };
            info!(
                "{} denied entry to {} ({destination_id}): locked",
                world.player.name(),
                destination.name
            );
            view.push(ViewItem::ActionFailure(message));
            return Ok(());
        },
    }

    world.current_room = destination_id;
    info!(
        "{} moved {direction} from room {leaving_id} to room {destination_id}",
        world.player.name()
    );
    view.push(ViewItem::TransitionMessage(format!("You move {direction}.")));
    world.player_room_mut()?.show(view);
    Ok(())
}
