//! Development mode command handlers.
//!
//! These handlers back the ':'-prefixed developer commands, which are only
//! run when the engine is built with the `dev-mode` feature. They let a
//! developer reach states that ordinary play can't (or can't quickly), such
//! as standing in a locked room or losing health, so the movement, damage and
//! death paths can be exercised by hand.
//!
//! # Available Commands
//!
//! - [`dev_teleport_handler`] - Instantly transport the player to any room
//! - [`dev_damage_handler`] - Hurt the player by a fixed amount
//! - [`dev_list_flags_handler`] - Show the current value of every world flag
//!
//! # Logging
//!
//! All dev commands log at `warn` level, leaving an audit trail of state that
//! was changed outside normal play.

use anyhow::Result;
use castaway_data::RoomId;
use log::warn;

use crate::{CastawayWorld, View, ViewItem};

/// Moves the player directly to a room by numeric id (dev-mode only).
///
/// Locks are ignored, and the destination is described as if the player had
/// walked in.
///
/// # Errors
/// - never in practice; the room is looked up before the player is moved
pub fn dev_teleport_handler(world: &mut CastawayWorld, view: &mut View, room_id: &str) -> Result<()> {
    let Some(target) = room_id.parse::<RoomId>().ok().filter(|id| world.rooms.contains_key(id)) else {
        view.push(ViewItem::ActionFailure(format!(
            "Teleport failed: no room with id '{room_id}'."
        )));
        return Ok(());
    };
    world.current_room = target;
    let room = world.player_room_mut()?;
    warn!("DEV command used: teleported player to {} ({})", room.name, room.id);
    view.push(ViewItem::TransitionMessage("You teleported...".to_string()));
    room.show(view);
    Ok(())
}

/// Applies damage to the player (dev-mode only).
///
/// The death check runs after the turn like any other, so enough damage ends
/// the session.
pub fn dev_damage_handler(world: &mut CastawayWorld, view: &mut View, amount: &str) {
    let Ok(amount) = amount.parse::<u32>() else {
        view.push(ViewItem::ActionFailure(format!("'{amount}' is not a damage amount.")));
        return;
    };
    let band = world.player.take_damage(amount);
    warn!(
        "DEV command used: player damaged by {amount} (now {} hp)",
        world.player.health.current_hp()
    );
    view.push(ViewItem::CharacterHarmed {
        name: world.player.name.clone(),
        amount,
        band: band.to_string(),
    });
}

/// Lists all world flags and their values (dev-mode only).
pub fn dev_list_flags_handler(world: &CastawayWorld, view: &mut View) {
    warn!("DEV command used: list flags");
    view.push(ViewItem::FlagList(
        world.flags.iter().map(|(name, value)| (name.clone(), *value)).collect(),
    ));
}
