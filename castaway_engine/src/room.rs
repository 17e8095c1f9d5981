//! Room definitions and spatial utilities.
//!
//! Every location on the island is a `Room`: a node in a fixed graph with
//! directed exits, a pile of items, a visited flag and an optional lock.

use std::collections::BTreeMap;

use castaway_data::{RoomDef, RoomId};

use crate::{
    View, ViewItem,
    item::{InventoryFull, Item, ItemHolder, take_named},
    view::RoomItemLine,
};

/// Result of trying to enter a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The room was never locked (or was unlocked earlier).
    Open,
    /// The room was locked and the visitor's key just opened it for good.
    Unlocked { key: String },
    /// The room is locked and the visitor lacks the key.
    Barred { key: Option<String> },
}

/// A node in the room graph.
#[derive(Debug)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// Short description, shown on every visit after the first.
    pub description: String,
    /// Shown on the first visit.
    pub long_description: String,
    pub visited: bool,
    pub locked: bool,
    pub required_key: Option<String>,
    /// direction -> destination; sorted so exit listings are stable
    pub exits: BTreeMap<String, RoomId>,
    pub contents: Vec<Item>,
}

impl Room {
    /// Create an unlocked, unvisited room with no exits or items. The long
    /// description defaults to the short one.
    pub fn new(id: RoomId, name: &str, description: &str) -> Room {
        Room {
            id,
            name: name.to_string(),
            description: description.to_string(),
            long_description: description.to_string(),
            visited: false,
            locked: false,
            required_key: None,
            exits: BTreeMap::new(),
            contents: Vec::new(),
        }
    }

    /// Build a room (without items) from its world-file definition.
    pub fn from_def(def: &RoomDef) -> Room {
        let mut room = Room::new(def.id, &def.name, &def.desc);
        if let Some(long) = &def.long_desc {
            room.long_description.clone_from(long);
        }
        room.locked = def.locked;
        room.required_key.clone_from(&def.required_key);
        for exit in &def.exits {
            room.add_exit(&exit.direction, exit.to);
        }
        room
    }

    /// Register a directed exit, replacing any existing exit in that direction.
    pub fn add_exit(&mut self, direction: &str, to: RoomId) {
        self.exits.insert(direction.to_lowercase(), to);
    }

    /// Destination of the exit in `direction`, if there is one.
    pub fn resolve_exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(&direction.to_lowercase()).copied()
    }

    /// Direction names with registered exits, sorted.
    pub fn list_exits(&self) -> Vec<&str> {
        self.exits.keys().map(String::as_str).collect()
    }

    /// Long description until the room has been visited, short description after.
    pub fn describe(&self) -> &str {
        if !self.visited && !self.long_description.is_empty() {
            &self.long_description
        } else {
            &self.description
        }
    }

    /// Push the room's description, items and exits to the view, then mark it visited.
    pub fn show(&mut self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.describe().to_string(),
        });
        if !self.contents.is_empty() {
            view.push(ViewItem::RoomItems(
                self.contents
                    .iter()
                    .map(|item| RoomItemLine {
                        name: item.name.clone(),
                        takeable: item.portable,
                    })
                    .collect(),
            ));
        }
        view.push(ViewItem::RoomExits(
            self.list_exits().into_iter().map(str::to_string).collect(),
        ));
        self.visited = true;
    }

    /// Check the lock against what the visitor carries.
    ///
    /// A locked room opens permanently once a visitor holding the required key
    /// arrives; later calls report `Admission::Open`.
    pub fn admit(&mut self, visitor: &impl ItemHolder) -> Admission {
        if !self.locked {
            return Admission::Open;
        }
        match &self.required_key {
            Some(key) if visitor.contains_item(key) => {
                let key = key.clone();
                self.locked = false;
                Admission::Unlocked { key }
            },
            key => Admission::Barred { key: key.clone() },
        }
    }
}

impl ItemHolder for Room {
    fn items(&self) -> &[Item] {
        &self.contents
    }

    fn add_item(&mut self, item: Item) -> Result<(), InventoryFull> {
        self.contents.push(item);
        Ok(())
    }

    fn remove_item(&mut self, name: &str) -> Option<Item> {
        take_named(&mut self.contents, name)
    }
}
