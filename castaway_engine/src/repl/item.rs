//! `repl::item` module
//!
//! Handler for using items from the player's inventory.

use anyhow::{Result, anyhow};
use log::info;

use crate::item::ItemHolder;
use crate::{CastawayWorld, View, ViewItem};

/// Use an item the player is carrying.
///
/// Consumables heal the player by their embedded amount, disappear from the
/// inventory and earn the consume reward.
///
/// # Errors
/// - if a consumable vanishes from the inventory between lookup and removal
pub fn use_handler(world: &mut CastawayWorld, view: &mut View, target: &str) -> Result<()> {
    let Some(item) = world.player.find_item(target) else {
        view.push(ViewItem::ActionFailure(format!("You don't have a {target}.")));
        return Ok(());
    };
    if !item.usable {
        view.push(ViewItem::ActionFailure("You can't use that.".to_string()));
        return Ok(());
    }

    let outcome = item.use_item();
    let used = item.name.clone();
    info!("{} used the {used} ({})", world.player.name(), item.kind);
    view.push(ViewItem::ActionSuccess(outcome.message));

    if let Some(heal) = outcome.consumed_heal {
        world
            .player
            .remove_item(&used)
            .ok_or_else(|| anyhow!("consumed item '{used}' missing from inventory"))?;
        let restored = world.player.heal(heal);
        view.push(ViewItem::CharacterHealed {
            name: world.player.name.clone(),
            amount: restored,
            health: world.player.health,
        });
        let reward = world.scoring.consume_reward;
        world.award_points(view, reward, &format!("Used the {used}"));
    }
    Ok(())
}
