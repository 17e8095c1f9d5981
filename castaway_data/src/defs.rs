use serde::{Deserialize, Serialize};

/// Numeric room identifier, assigned in the world file and never reused.
pub type RoomId = u32;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub flags: Vec<FlagDef>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub tagline: Vec<String>,
    pub intro: String,
    pub player: PlayerDef,
    #[serde(default)]
    pub scoring: ScoringDef,
    pub finale: FinaleDef,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: Vec::new(),
            intro: String::new(),
            player: PlayerDef::default(),
            scoring: ScoringDef::default(),
            finale: FinaleDef::default(),
        }
    }
}

/// Starting configuration for the player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    #[serde(default = "default_player_name")]
    pub name: String,
    pub start_room: RoomId,
    #[serde(default = "default_max_hp")]
    pub max_hp: u32,
    #[serde(default = "default_capacity")]
    pub inventory_capacity: usize,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            start_room: 1,
            max_hp: default_max_hp(),
            inventory_capacity: default_capacity(),
        }
    }
}

/// Point awards for scripted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDef {
    #[serde(default = "default_take_reward")]
    pub take_reward: usize,
    #[serde(default = "default_consume_reward")]
    pub consume_reward: usize,
    #[serde(default = "default_win_bonus")]
    pub win_bonus: usize,
}

impl Default for ScoringDef {
    fn default() -> Self {
        Self {
            take_reward: default_take_reward(),
            consume_reward: default_consume_reward(),
            win_bonus: default_win_bonus(),
        }
    }
}

/// The terminal room and item whose simultaneous presence wins the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinaleDef {
    pub room: RoomId,
    pub item: String,
    #[serde(default)]
    pub message: Vec<String>,
}

/// A named narrative flag with its starting value and an optional rule
/// that keeps it in sync with world state after every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagDef {
    pub name: String,
    #[serde(default)]
    pub initial: bool,
    #[serde(default)]
    pub rule: Option<FlagRuleDef>,
}

/// World-state predicates a derived flag can mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagRuleDef {
    HoldsItem { item: String },
    VisitedRoom { room: RoomId },
    RoomUnlocked { room: RoomId },
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: RoomId,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub long_desc: Option<String>,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub required_key: Option<String>,
}

/// A directed passage out of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: RoomId,
}

/// Item definition; `room` is where the item starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub name: String,
    pub desc: String,
    pub room: RoomId,
    #[serde(default)]
    pub kind: ItemKindDef,
    #[serde(default = "default_portable")]
    pub portable: bool,
    #[serde(default)]
    pub usable: Option<bool>,
    #[serde(default)]
    pub value: Option<u32>,
}

/// Behavior variant of an item and its variant-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKindDef {
    #[default]
    Plain,
    Key { unlocks: String },
    Weapon { damage: u32 },
    Consumable { heal: u32 },
    Treasure,
}

fn default_player_name() -> String {
    "Adventurer".to_string()
}

fn default_max_hp() -> u32 {
    100
}

fn default_capacity() -> usize {
    10
}

fn default_take_reward() -> usize {
    10
}

fn default_consume_reward() -> usize {
    5
}

fn default_win_bonus() -> usize {
    100
}

fn default_portable() -> bool {
    true
}
