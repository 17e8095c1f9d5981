//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that move items between the
//! current room and the player's inventory.

use anyhow::Result;
use log::info;

use crate::item::{InventoryFull, ItemHolder};
use crate::{CastawayWorld, View, ViewItem};

/// Take an item from the current room.
///
/// If the inventory is full the item goes back to the room at its original
/// position, so a refused take leaves both containers exactly as they were.
///
/// # Errors
/// - if the current room is missing
pub fn take_handler(world: &mut CastawayWorld, view: &mut View, target: &str) -> Result<()> {
    let (player, room) = world.player_and_room_mut()?;
    let Some(index) = room.contents.iter().position(|item| item.is_named(target)) else {
        view.push(ViewItem::ActionFailure(format!("There's no {target} here.")));
        return Ok(());
    };
    if !room.contents[index].portable {
        view.push(ViewItem::ActionFailure("You can't take that.".to_string()));
        info!("{} tried to take fixed item '{target}'", player.name());
        return Ok(());
    }

    let item = room.contents.remove(index);
    let taken = item.name.clone();
    if let Err(InventoryFull { item, capacity }) = player.add_item(item) {
        room.contents.insert(index, item);
        info!("{} couldn't take the {taken}: inventory full ({capacity})", player.name());
        view.push(ViewItem::ActionFailure("Your inventory is full!".to_string()));
        return Ok(());
    }
    info!("{} took the {taken} from {} ({})", player.name(), room.name, room.id);
    view.push(ViewItem::ActionSuccess(format!("You take the {taken}.")));

    let reward = world.scoring.take_reward;
    world.award_points(view, reward, &format!("Picked up the {taken}"));
    Ok(())
}

/// Drop an item from inventory into the current room.
///
/// # Errors
/// - if the current room is missing
pub fn drop_handler(world: &mut CastawayWorld, view: &mut View, target: &str) -> Result<()> {
    let (player, room) = world.player_and_room_mut()?;
    let Some(item) = player.remove_item(target) else {
        view.push(ViewItem::ActionFailure(format!("You don't have a {target}.")));
        return Ok(());
    };
    let dropped = item.name.clone();
    room.add_item(item)?;
    info!("{} dropped the {dropped} in {} ({})", player.name(), room.name, room.id);
    view.push(ViewItem::ActionSuccess(format!("You drop the {dropped}.")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Room};

    fn test_world() -> CastawayWorld {
        let mut world = CastawayWorld::new_empty();
        let mut beach = Room::new(1, "Beach", "Waves lap at the sand.");
        for name in ["seashell", "driftwood", "vine"] {
            beach.add_item(Item::new(name, "Beach junk.")).expect("rooms never fill");
        }
        let mut boulder = Item::new("boulder", "Far too heavy.");
        boulder.portable = false;
        beach.add_item(boulder).expect("rooms never fill");
        world.rooms.insert(1, beach);
        world.current_room = 1;
        world
    }

    fn room_items(world: &CastawayWorld) -> Vec<String> {
        world.rooms[&1].item_names()
    }

    #[test]
    fn take_moves_item_and_scores() {
        let mut world = test_world();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "Seashell").expect("room exists");
        assert!(world.player.contains_item("seashell"));
        assert!(!world.rooms[&1].contains_item("seashell"));
        assert_eq!(world.score, 10);
        assert!(view.contains(|item| item == &ViewItem::ActionSuccess("You take the seashell.".into())));
    }

    #[test]
    fn take_refusals() {
        let mut world = test_world();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "idol").expect("room exists");
        take_handler(&mut world, &mut view, "boulder").expect("room exists");
        assert!(view.contains(|item| item == &ViewItem::ActionFailure("There's no idol here.".into())));
        assert!(view.contains(|item| item == &ViewItem::ActionFailure("You can't take that.".into())));
        assert!(world.player.inventory.is_empty());
        assert_eq!(world.score, 0);
    }

    #[test]
    fn full_inventory_rolls_back_in_place() {
        let mut world = test_world();
        world.player.capacity = 1;
        world.player.add_item(Item::new("torch", "")).expect("room for torch");
        let before = room_items(&world);

        let mut view = View::new();
        take_handler(&mut world, &mut view, "driftwood").expect("room exists");
        assert_eq!(room_items(&world), before);
        assert_eq!(world.player.item_names(), vec!["torch".to_string()]);
        assert_eq!(world.score, 0);
        assert!(view.contains(|item| item == &ViewItem::ActionFailure("Your inventory is full!".into())));
    }

    #[test]
    fn drop_is_inverse_of_take() {
        let mut world = test_world();
        let mut view = View::new();
        take_handler(&mut world, &mut view, "vine").expect("room exists");
        drop_handler(&mut world, &mut view, "vine").expect("room exists");
        assert!(!world.player.contains_item("vine"));
        assert!(world.rooms[&1].contains_item("vine"));

        drop_handler(&mut world, &mut view, "vine").expect("room exists");
        assert!(view.contains(|item| item == &ViewItem::ActionFailure("You don't have a vine.".into())));
    }
}
