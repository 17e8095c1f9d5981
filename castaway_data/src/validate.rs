use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use castaway_data::{FinaleDef, GameDef, ItemDef, ItemKindDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef::default(),
///         finale: FinaleDef { room: 1, item: "idol".into(), message: Vec::new() },
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: 1,
///         name: "Start".into(),
///         desc: "A room.".into(),
///         long_desc: None,
///         exits: Vec::new(),
///         locked: false,
///         required_key: None,
///     }],
///     items: vec![ItemDef {
///         name: "idol".into(),
///         desc: "Shiny.".into(),
///         room: 1,
///         kind: ItemKindDef::Treasure,
///         portable: true,
///         usable: None,
///         value: Some(100),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    for room in &world.rooms {
        if !rooms.insert(room.id) {
            errors.push(ValidationError::DuplicateId {
                kind: "room",
                id: room.id.to_string(),
            });
        }
    }

    // item names only need to be unique within their starting room
    let mut placed = HashSet::new();
    for item in &world.items {
        if !placed.insert((item.room, item.name.to_lowercase())) {
            errors.push(ValidationError::DuplicateId {
                kind: "item",
                id: format!("{} in room {}", item.name, item.room),
            });
        }
    }
    let item_names: HashSet<String> = world.items.iter().map(|i| i.name.to_lowercase()).collect();

    let mut flags = HashSet::new();
    for flag in &world.flags {
        if !flags.insert(flag.name.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "flag",
                id: flag.name.clone(),
            });
        }
    }

    let player = &world.game.player;
    check_room(player.start_room, &rooms, "game player start room", &mut errors);
    if player.max_hp == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "player max_hp must be positive".to_string(),
        });
    }
    if player.inventory_capacity == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "player inventory_capacity must be positive".to_string(),
        });
    }

    let finale = &world.game.finale;
    check_room(finale.room, &rooms, "game finale", &mut errors);
    check_item(&finale.item, &item_names, "game finale", &mut errors);

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has two '{}' exits", room.id, exit.direction),
                });
            }
            check_room(
                exit.to,
                &rooms,
                &format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
        }
        match (&room.required_key, room.locked) {
            (None, true) => errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' is locked but names no key", room.id),
            }),
            (Some(key), _) => check_item(key, &item_names, &format!("room '{}' lock", room.id), &mut errors),
            (None, false) => {},
        }
    }

    for item in &world.items {
        check_room(item.room, &rooms, &format!("item '{}'", item.name), &mut errors);
        if item.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("item in room {} has an empty name", item.room),
            });
        }
        if item.kind == ItemKindDef::Treasure && item.usable == Some(true) {
            errors.push(ValidationError::InvalidValue {
                context: format!("treasure '{}' cannot be usable", item.name),
            });
        }
    }

    for flag in &world.flags {
        let context = format!("flag '{}' rule", flag.name);
        match &flag.rule {
            Some(FlagRuleDef::HoldsItem { item }) => check_item(item, &item_names, &context, &mut errors),
            Some(FlagRuleDef::VisitedRoom { room } | FlagRuleDef::RoomUnlocked { room }) => {
                check_room(*room, &rooms, &context, &mut errors);
            },
            None => {},
        }
    }

    errors
}

fn check_room(id: RoomId, rooms: &HashSet<RoomId>, context: &str, errors: &mut Vec<ValidationError>) {
    if !rooms.contains(&id) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: id.to_string(),
            context: context.to_string(),
        });
    }
}

fn check_item(name: &str, items: &HashSet<String>, context: &str, errors: &mut Vec<ValidationError>) {
    if !items.contains(&name.to_lowercase()) {
        errors.push(ValidationError::MissingReference {
            kind: "item",
            id: name.to_string(),
            context: context.to_string(),
        });
    }
}
