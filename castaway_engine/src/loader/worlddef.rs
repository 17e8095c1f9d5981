//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use castaway_data::WorldDef;
use log::info;

use crate::item::{Item, ItemHolder};
use crate::player::Player;
use crate::room::Room;
use crate::world::{CastawayWorld, Finale, FlagRule};

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - on file IO error or RON parsing error
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a validated `WorldDef` into a populated `CastawayWorld` (help is loaded separately).
///
/// # Errors
/// - if an item's starting room is missing (validation rules this out)
pub fn build_world_from_def(def: &WorldDef) -> Result<CastawayWorld> {
    let mut world = CastawayWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.tagline.clone_from(&def.game.tagline);
    world.intro.clone_from(&def.game.intro);
    world.scoring = def.game.scoring;

    for room_def in &def.rooms {
        let room = Room::from_def(room_def);
        world.rooms.insert(room.id, room);
    }

    for item_def in &def.items {
        let room = world
            .rooms
            .get_mut(&item_def.room)
            .ok_or_else(|| anyhow!("item '{}' placed in missing room {}", item_def.name, item_def.room))?;
        room.add_item(Item::from_def(item_def))
            .with_context(|| format!("placing item '{}'", item_def.name))?;
    }

    for flag_def in &def.flags {
        world.flags.insert(flag_def.name.clone(), flag_def.initial);
        if let Some(rule) = &flag_def.rule {
            world.flag_rules.push((flag_def.name.clone(), FlagRule::from(rule)));
        }
    }

    let player_def = &def.game.player;
    world.player = Player::new(&player_def.name, player_def.max_hp, player_def.inventory_capacity);
    world.current_room = player_def.start_room;

    world.finale = Finale {
        room: def.game.finale.room,
        item: def.game.finale.item.clone(),
        message: def.game.finale.message.clone(),
    };

    info!(
        "world built: {} rooms, {} items, {} flags",
        world.rooms.len(),
        def.items.len(),
        world.flags.len()
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL_WORLD: &str = r#"(
        game: (
            title: "Test Island",
            intro: "You wake up.",
            player: (start_room: 1, inventory_capacity: 2),
            scoring: (take_reward: 3),
            finale: (room: 2, item: "idol", message: ["You win."]),
        ),
        flags: [
            (name: "has_idol", rule: Some(holdsItem(item: "idol"))),
            (name: "temple_door_open", initial: false),
        ],
        rooms: [
            (id: 1, name: "Beach", desc: "Sand.", long_desc: Some("Sand as far as you can see."),
             exits: [(direction: "north", to: 2)]),
            (id: 2, name: "Temple", desc: "Stone.", locked: true, required_key: Some("key"),
             exits: [(direction: "south", to: 1)]),
        ],
        items: [
            (name: "key", desc: "A key.", room: 1, kind: key(unlocks: "temple")),
            (name: "idol", desc: "Gold.", room: 1, kind: treasure, value: Some(100)),
            (name: "herbs", desc: "Green.", room: 1, kind: consumable(heal: 25)),
        ],
    )"#;

    fn write_world(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(text.as_bytes()).expect("write world");
        file
    }

    #[test]
    fn loads_and_builds_from_file() {
        let file = write_world(SMALL_WORLD);
        let def = load_worlddef(file.path()).expect("world parses");
        let world = build_world_from_def(&def).expect("world builds");

        assert_eq!(world.title, "Test Island");
        assert_eq!(world.current_room, 1);
        assert_eq!(world.player.capacity, 2);
        assert_eq!(world.player.name(), "Adventurer");
        assert_eq!(world.scoring.take_reward, 3);
        assert_eq!(world.scoring.win_bonus, 100);
        assert_eq!(world.rooms[&1].item_names(), vec!["key", "idol", "herbs"]);
        assert_eq!(world.rooms[&1].describe(), "Sand as far as you can see.");
        assert!(world.rooms[&2].locked);
        assert_eq!(world.finale.item, "idol");
        assert_eq!(world.flag_rules, vec![("has_idol".to_string(), FlagRule::HoldsItem("idol".into()))]);
        assert!(!world.flag("temple_door_open"));

        let herbs = world.rooms[&1].find_item("herbs").expect("herbs placed");
        assert!(herbs.usable);
        assert_eq!(herbs.value, 25);
    }

    #[test]
    fn malformed_ron_reports_path() {
        let file = write_world("(game: (title: ");
        let err = load_worlddef(file.path()).expect_err("bad RON");
        assert!(format!("{err:#}").contains("parsing worlddef RON"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_worlddef(Path::new("no/such/world.ron")).is_err());
    }
}
