use castaway_engine as ce;
use ce::command::{Command, parse_command};
use ce::health::{HealthBand, HealthState};
use ce::item::ItemKind;
use ce::*;

#[test]
fn test_lib_version() {
    assert!(!ce::CASTAWAY_VERSION.is_empty());
}

#[test]
fn test_command_parse() {
    assert_eq!(parse_command("look"), Command::Look);
    assert_eq!(parse_command("PICK UP temple key"), Command::Take("temple key".into()));
    assert_eq!(parse_command("dance"), Command::Unknown);
    assert_eq!(parse_command("take"), Command::MissingTarget("take".into()));
}

#[test]
fn test_health_bands() {
    let mut player = Player::default();
    assert_eq!(player.take_damage(40), HealthBand::Healthy);
    assert_eq!(player.take_damage(20), HealthBand::Hurt);
    assert_eq!(player.take_damage(30), HealthBand::BadlyInjured);
    assert_eq!(player.take_damage(30), HealthBand::Dead);
    assert_eq!(player.health.current_hp(), 0);
    assert!(!player.is_alive());
}

#[test]
fn test_heal_clamps_to_max() {
    let mut player = Player::new("Tester", 100, 10);
    player.take_damage(10);
    assert_eq!(player.heal(50), 10);
    assert_eq!(player.health, HealthState::new_at_max(100));
    assert_eq!(player.heal(0), 0);
    assert_eq!(player.status_label(), "Perfect health");
}

#[test]
fn test_inventory_capacity_enforced() {
    let mut player = Player::new("Tester", 100, 2);
    player.add_item(Item::new("seashell", "A shell.")).expect("room for one");
    player.add_item(Item::new("driftwood", "Wood.")).expect("room for two");
    let err = player.add_item(Item::new("vine", "A vine.")).expect_err("inventory is full");
    assert_eq!(err.item.name, "vine");
    assert_eq!(err.capacity, 2);
    assert_eq!(player.items().len(), 2);
    assert!(player.remove_item("tablet").is_none());
}

#[test]
fn test_item_kind_labels() {
    let labels: Vec<String> = [
        ItemKind::Plain,
        ItemKind::Key { unlocks: "chest".into() },
        ItemKind::Weapon { damage: 15 },
        ItemKind::Consumable { heal: 25 },
        ItemKind::Treasure,
    ]
    .into_iter()
    .map(|kind| Item::with_kind("thing", "", kind).kind_label())
    .collect();
    assert_eq!(labels, vec!["Item", "Key", "Weapon", "Consumable", "Treasure"]);
}

#[test]
fn test_treasure_cannot_be_used() {
    let mut idol = Item::with_kind("idol", "Golden.", ItemKind::Treasure);
    idol.value = 100;
    assert!(!idol.usable);
    assert_eq!(idol.use_item().consumed_heal, None);
    assert!(idol.examine().iter().any(|line| line.contains("worth 100 gold")));
}

#[test]
fn test_room_lock_is_permanent() {
    let mut room = Room::new(9, "Inner Temple", "Pillars.");
    room.locked = true;
    room.required_key = Some("temple key".into());

    let mut player = Player::default();
    assert!(matches!(room.admit(&player), room::Admission::Barred { .. }));
    assert!(room.locked);

    player
        .add_item(Item::with_kind("temple key", "Ornate.", ItemKind::Key {
            unlocks: "inner temple".into(),
        }))
        .expect("inventory has room");
    assert!(matches!(room.admit(&player), room::Admission::Unlocked { .. }));
    assert!(!room.locked);

    player.remove_item("temple key");
    assert_eq!(room.admit(&player), room::Admission::Open);
}

#[test]
fn test_view_collects_items() {
    let mut view = View::new();
    view.push(ViewItem::ActionSuccess("You take the seashell.".into()));
    view.push(ViewItem::Score(10));
    assert_eq!(view.items.len(), 2);
    assert!(view.contains(|item| matches!(item, ViewItem::Score(10))));
}
