//! Data structures representing the game world.
//!
//! This module defines [`CastawayWorld`] and related types used at runtime to
//! track the current state of the adventure.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow};
use castaway_data::{FlagRuleDef, RoomId, ScoringDef};
use log::info;
use variantly::Variantly;

use crate::item::ItemHolder;
use crate::loader::help::HelpData;
use crate::{Player, Room, View, ViewItem};

/// Where the session stands in its turn state machine.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Variantly)]
pub enum GameStatus {
    #[default]
    Playing,
    /// The player asked to quit; the next line is the yes/no answer.
    ConfirmingQuit,
    Won,
    Died,
    Quit,
}

/// World-state predicate that a derived flag mirrors after every turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagRule {
    HoldsItem(String),
    VisitedRoom(RoomId),
    RoomUnlocked(RoomId),
}
impl From<&FlagRuleDef> for FlagRule {
    fn from(def: &FlagRuleDef) -> Self {
        match def {
            FlagRuleDef::HoldsItem { item } => FlagRule::HoldsItem(item.clone()),
            FlagRuleDef::VisitedRoom { room } => FlagRule::VisitedRoom(*room),
            FlagRuleDef::RoomUnlocked { room } => FlagRule::RoomUnlocked(*room),
        }
    }
}

/// The room and item whose simultaneous presence wins the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finale {
    pub room: RoomId,
    pub item: String,
    pub message: Vec<String>,
}

/// Complete state of the running game.
///
/// `CastawayWorld` owns every room (and through them every item not being
/// carried), the player, the score and the narrative flags. It is created
/// during loading and then mutated by the command handlers.
#[derive(Debug, Default)]
pub struct CastawayWorld {
    pub title: String,
    pub tagline: Vec<String>,
    pub intro: String,
    pub rooms: BTreeMap<RoomId, Room>,
    pub player: Player,
    pub current_room: RoomId,
    pub flags: BTreeMap<String, bool>,
    pub flag_rules: Vec<(String, FlagRule)>,
    pub score: usize,
    pub scoring: ScoringDef,
    pub finale: Finale,
    pub status: GameStatus,
    pub help: HelpData,
    pub turn_count: usize,
}
impl CastawayWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> CastawayWorld {
        let world = CastawayWorld::default();
        info!("new, empty 'CastawayWorld' created");
        world
    }

    /// Get a reference to the room the player is in.
    ///
    /// # Errors
    /// - if the current room id is not in the room graph
    pub fn player_room_ref(&self) -> Result<&Room> {
        self.rooms
            .get(&self.current_room)
            .ok_or_else(|| anyhow!("player's current room ({}) is not in the world", self.current_room))
    }

    /// Get a mutable reference to the room the player is in.
    ///
    /// # Errors
    /// - if the current room id is not in the room graph
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let current = self.current_room;
        self.rooms
            .get_mut(&current)
            .ok_or_else(|| anyhow!("player's current room ({current}) is not in the world"))
    }

    /// Borrow the player and the current room at the same time, for moving items between them.
    ///
    /// # Errors
    /// - if the current room id is not in the room graph
    pub fn player_and_room_mut(&mut self) -> Result<(&mut Player, &mut Room)> {
        let current = self.current_room;
        let room = self
            .rooms
            .get_mut(&current)
            .ok_or_else(|| anyhow!("player's current room ({current}) is not in the world"))?;
        Ok((&mut self.player, room))
    }

    /// True while the session accepts commands.
    pub fn is_running(&self) -> bool {
        matches!(self.status, GameStatus::Playing | GameStatus::ConfirmingQuit)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        let previous = self.flags.insert(name.to_string(), value);
        if previous != Some(value) {
            info!("flag '{name}' set to {value}");
        }
    }

    /// Re-derive every rule-backed flag from current world state.
    pub fn refresh_flags(&mut self) {
        let derived: Vec<(String, bool)> = self
            .flag_rules
            .iter()
            .map(|(name, rule)| (name.clone(), self.rule_holds(rule)))
            .collect();
        for (name, value) in derived {
            self.set_flag(&name, value);
        }
    }

    fn rule_holds(&self, rule: &FlagRule) -> bool {
        match rule {
            FlagRule::HoldsItem(item) => self.player.contains_item(item),
            FlagRule::VisitedRoom(id) => self.rooms.get(id).is_some_and(|room| room.visited),
            FlagRule::RoomUnlocked(id) => self.rooms.get(id).is_some_and(|room| !room.locked),
        }
    }

    /// True when the player stands in the finale room holding the finale item.
    pub fn finale_reached(&self) -> bool {
        self.current_room == self.finale.room && self.player.contains_item(&self.finale.item)
    }

    /// Add to the score and announce it.
    pub fn award_points(&mut self, view: &mut View, amount: usize, reason: &str) {
        if amount == 0 {
            return;
        }
        self.score = self.score.saturating_add(amount);
        info!("{amount} points awarded ({reason}); score now {}", self.score);
        view.push(ViewItem::PointsAwarded {
            amount,
            reason: reason.to_string(),
        });
    }

    pub fn visited_count(&self) -> usize {
        self.rooms.values().filter(|room| room.visited).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    fn test_world() -> CastawayWorld {
        let mut world = CastawayWorld::new_empty();
        let mut beach = Room::new(1, "Beach", "Sand.");
        beach.add_exit("north", 2);
        let mut cave = Room::new(2, "Hidden Cave", "Dark.");
        cave.locked = true;
        cave.required_key = Some("torch".into());
        world.rooms.insert(1, beach);
        world.rooms.insert(2, cave);
        world.current_room = 1;
        world
    }

    #[test]
    fn player_room_lookup_reports_missing_room() {
        let mut world = test_world();
        assert_eq!(world.player_room_ref().map(|r| r.id).ok(), Some(1));
        world.current_room = 99;
        assert!(world.player_room_ref().is_err());
        assert!(world.player_and_room_mut().is_err());
    }

    #[test]
    fn derived_flags_follow_world_state() {
        let mut world = test_world();
        world.flags.insert("has_torch".into(), false);
        world.flag_rules.push(("has_torch".into(), FlagRule::HoldsItem("torch".into())));
        world.flag_rules.push(("cave_explored".into(), FlagRule::VisitedRoom(2)));
        world.flag_rules.push(("cave_open".into(), FlagRule::RoomUnlocked(2)));

        world.refresh_flags();
        assert!(!world.flag("has_torch"));
        assert!(!world.flag("cave_explored"));
        assert!(!world.flag("cave_open"));

        world.player.add_item(Item::new("torch", "")).expect("room for torch");
        world.rooms.get_mut(&2).expect("cave exists").visited = true;
        world.rooms.get_mut(&2).expect("cave exists").locked = false;
        world.refresh_flags();
        assert!(world.flag("has_torch"));
        assert!(world.flag("cave_explored"));
        assert!(world.flag("cave_open"));

        // holding flags mirror both ways
        world.player.remove_item("torch");
        world.refresh_flags();
        assert!(!world.flag("has_torch"));
    }

    #[test]
    fn award_points_updates_score_and_view() {
        let mut world = test_world();
        let mut view = View::new();
        world.award_points(&mut view, 10, "Took the seashell");
        world.award_points(&mut view, 0, "nothing");
        assert_eq!(world.score, 10);
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn running_states() {
        let mut world = test_world();
        assert!(world.is_running());
        world.status = GameStatus::ConfirmingQuit;
        assert!(world.is_running());
        for done in [GameStatus::Won, GameStatus::Died, GameStatus::Quit] {
            world.status = done;
            assert!(!world.is_running());
        }
    }
}
