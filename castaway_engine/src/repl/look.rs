//! `repl::look` module
//!
//! Contains repl loop handlers for commands that inspect the world without changing it.

use anyhow::Result;
use log::info;

use crate::item::ItemHolder;
use crate::view::ContentLine;
use crate::{CastawayWorld, View, ViewItem};

/// Show description of the current room, its items and its exits.
///
/// # Errors
/// - if the current room is missing
pub fn look_handler(world: &mut CastawayWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_mut()?;
    room.show(view);
    info!("player looked around {} ({})", room.name, room.id);
    Ok(())
}

/// Show details of an item, searching the inventory first and then the room.
///
/// # Errors
/// - if the current room is missing
pub fn examine_handler(world: &CastawayWorld, view: &mut View, target: &str) -> Result<()> {
    let room = world.player_room_ref()?;
    if let Some(item) = world.player.find_item(target).or_else(|| room.find_item(target)) {
        info!("{} examined the {} ({})", world.player.name(), item.name, item.kind_label());
        view.push(ViewItem::ItemDescription {
            name: item.name.clone(),
            lines: item.examine(),
        });
    } else {
        view.push(ViewItem::ActionFailure(format!("You don't see a {target} here.")));
    }
    Ok(())
}

/// List the items the player is carrying.
pub fn inv_handler(world: &CastawayWorld, view: &mut View) {
    view.push(ViewItem::Inventory {
        items: world
            .player
            .items()
            .iter()
            .map(|item| ContentLine {
                item_name: item.name.clone(),
                value: item.value,
            })
            .collect(),
        capacity: world.player.capacity,
    });
}

/// Show the player's health and load.
pub fn status_handler(world: &CastawayWorld, view: &mut View) {
    let condition = world.player.status_label();
    info!("{} checked status: {condition}", world.player.name());
    view.push(ViewItem::PlayerStatus {
        name: world.player.name.clone(),
        health: world.player.health,
        condition: condition.to_string(),
        carried: world.player.items().len(),
        capacity: world.player.capacity,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Room};

    fn test_world() -> CastawayWorld {
        let mut world = CastawayWorld::new_empty();
        let mut grove = Room::new(7, "Mysterious Grove", "A quiet grove.");
        grove.add_exit("east", 5);
        grove
            .add_item(Item::new("scroll", "An old scroll, from the grove."))
            .expect("rooms never fill");
        world.rooms.insert(7, grove);
        world.current_room = 7;
        world
    }

    #[test]
    fn look_marks_room_visited() {
        let mut world = test_world();
        let mut view = View::new();
        look_handler(&mut world, &mut view).expect("room exists");
        assert!(world.rooms[&7].visited);
        assert!(view.contains(|item| item == &ViewItem::RoomExits(vec!["east".into()])));
    }

    #[test]
    fn examine_prefers_inventory() {
        let mut world = test_world();
        world
            .player
            .add_item(Item::new("scroll", "A scroll you brought along."))
            .expect("inventory has room");
        let mut view = View::new();
        examine_handler(&world, &mut view, "Scroll").expect("room exists");
        assert!(view.contains(|item| {
            matches!(item, ViewItem::ItemDescription { lines, .. } if lines[0] == "A scroll you brought along.")
        }));
    }

    #[test]
    fn examine_falls_back_to_room_then_fails() {
        let world = test_world();
        let mut view = View::new();
        examine_handler(&world, &mut view, "scroll").expect("room exists");
        assert!(view.contains(|item| {
            matches!(item, ViewItem::ItemDescription { lines, .. } if lines[0] == "An old scroll, from the grove.")
        }));

        view.reset();
        examine_handler(&world, &mut view, "idol").expect("room exists");
        assert!(view.contains(|item| item == &ViewItem::ActionFailure("You don't see a idol here.".into())));
    }

    #[test]
    fn inventory_lists_values_and_capacity() {
        let mut world = test_world();
        let mut map = Item::new("map", "A map.");
        map.value = 100;
        world.player.add_item(map).expect("inventory has room");
        let mut view = View::new();
        inv_handler(&world, &mut view);
        assert_eq!(
            view.items[0].view_item,
            ViewItem::Inventory {
                items: vec![ContentLine {
                    item_name: "map".into(),
                    value: 100
                }],
                capacity: 10,
            }
        );
    }

    #[test]
    fn status_reports_the_players_condition() {
        let mut world = test_world();
        let mut view = View::new();
        status_handler(&world, &mut view);
        assert!(view.contains(|item| {
            matches!(item, ViewItem::PlayerStatus { condition, carried: 0, .. } if condition == "Perfect health")
        }));

        world.player.take_damage(35);
        view.reset();
        status_handler(&world, &mut view);
        assert!(view.contains(|item| {
            matches!(item, ViewItem::PlayerStatus { condition, .. } if condition == "Moderately injured")
        }));
    }
}
