//! Item types and related helpers.
//!
//! Items are the objects the player can pick up, carry and use. Each one is
//! owned by exactly one [`ItemHolder`] at a time (a room or the player) and
//! moves between holders by value, so an item can never be duplicated.

use std::fmt::Display;

use castaway_data::{ItemDef, ItemKindDef};
use thiserror::Error;
use variantly::Variantly;

/// Anything in the world that can be picked up, examined or used.
///
/// `portable` controls whether it can be taken; `usable` whether the `use`
/// command applies to it. `value` is the item's worth in gold.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    /// The display name, also used to refer to the item in commands.
    pub name: String,
    /// A general description of the item.
    pub description: String,
    /// Behavior variant and its data.
    pub kind: ItemKind,
    pub portable: bool,
    pub usable: bool,
    pub value: u32,
}

/// Behavior variants of an item.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ItemKind {
    Plain,
    /// Opens the lock named by `unlocks`.
    Key { unlocks: String },
    /// Purely descriptive; nothing in the world takes damage.
    Weapon { damage: u32 },
    /// Heals the holder when used, then disappears.
    Consumable { heal: u32 },
    Treasure,
}
impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Plain => write!(f, "Item"),
            ItemKind::Key { .. } => write!(f, "Key"),
            ItemKind::Weapon { .. } => write!(f, "Weapon"),
            ItemKind::Consumable { .. } => write!(f, "Consumable"),
            ItemKind::Treasure => write!(f, "Treasure"),
        }
    }
}

/// Result of using an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseOutcome {
    pub message: String,
    /// `Some(heal)` when the item was consumed by this use.
    pub consumed_heal: Option<u32>,
}

impl Item {
    /// Create a plain, portable, unusable item worth nothing.
    pub fn new(name: &str, description: &str) -> Item {
        Item::with_kind(name, description, ItemKind::Plain)
    }

    /// Create a portable item of the given kind, with the usability and value
    /// that kind carries by default.
    pub fn with_kind(name: &str, description: &str, kind: ItemKind) -> Item {
        let (usable, value) = match &kind {
            ItemKind::Plain | ItemKind::Treasure => (false, 0),
            ItemKind::Key { .. } => (true, 25),
            ItemKind::Weapon { damage } => (true, damage.saturating_mul(2)),
            ItemKind::Consumable { heal } => (true, *heal),
        };
        Item {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            portable: true,
            usable,
            value,
        }
    }

    /// Build a runtime item from its world-file definition.
    pub fn from_def(def: &ItemDef) -> Item {
        let kind = match &def.kind {
            ItemKindDef::Plain => ItemKind::Plain,
            ItemKindDef::Key { unlocks } => ItemKind::Key {
                unlocks: unlocks.clone(),
            },
            ItemKindDef::Weapon { damage } => ItemKind::Weapon { damage: *damage },
            ItemKindDef::Consumable { heal } => ItemKind::Consumable { heal: *heal },
            ItemKindDef::Treasure => ItemKind::Treasure,
        };
        let mut item = Item::with_kind(&def.name, &def.desc, kind);
        item.portable = def.portable;
        if let Some(usable) = def.usable {
            item.usable = usable && !item.kind.is_treasure();
        }
        if let Some(value) = def.value {
            item.value = value;
        }
        item
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind_label(&self) -> String {
        self.kind.to_string()
    }

    /// True if `name` refers to this item (case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Use the item, returning what happened and whether it was consumed.
    pub fn use_item(&self) -> UseOutcome {
        if !self.usable {
            return UseOutcome {
                message: "You can't use that.".to_string(),
                consumed_heal: None,
            };
        }
        let (message, consumed_heal) = match &self.kind {
            ItemKind::Plain => (format!("You use the {}.", self.name), None),
            ItemKind::Key { unlocks } => (
                format!("You hold up the {}. It might unlock {unlocks}.", self.name),
                None,
            ),
            ItemKind::Weapon { damage } => (
                format!(
                    "You brandish the {} menacingly. It deals {damage} damage.",
                    self.name
                ),
                None,
            ),
            ItemKind::Consumable { heal } => (
                format!("You consume the {} and feel refreshed!", self.name),
                Some(*heal),
            ),
            ItemKind::Treasure => ("You can't use that.".to_string(), None),
        };
        UseOutcome { message, consumed_heal }
    }

    /// Description lines for the `examine` command, including value and
    /// takeable / usable notes.
    pub fn examine(&self) -> Vec<String> {
        let mut lines = vec![self.description.clone()];
        if self.kind.is_treasure() {
            lines.push(format!(
                "This treasure is worth {} gold! It would fetch a handsome price from any collector.",
                self.value
            ));
            if self.portable {
                lines.push("You can take this valuable item.".to_string());
            }
            return lines;
        }
        if self.value > 0 {
            lines.push(format!("This item appears to be worth {} gold.", self.value));
        }
        if self.portable {
            lines.push("You can take this item.".to_string());
        }
        if self.usable {
            lines.push("This item can be used.".to_string());
        }
        lines
    }
}

/// Returned when an item can't be placed in a holder; hands the item back.
#[derive(Debug, Error)]
#[error("no room for the {} (capacity {capacity})", .item.name)]
pub struct InventoryFull {
    pub item: Item,
    pub capacity: usize,
}

/// Methods common to things that can hold items.
pub trait ItemHolder {
    /// The items currently held, in insertion order.
    fn items(&self) -> &[Item];

    /// Take ownership of an item.
    ///
    /// # Errors
    /// - `InventoryFull` (holding the rejected item) if the holder has no room.
    fn add_item(&mut self, item: Item) -> Result<(), InventoryFull>;

    /// Give up ownership of the named item, or `None` if it isn't held.
    fn remove_item(&mut self, name: &str) -> Option<Item>;

    fn find_item(&self, name: &str) -> Option<&Item> {
        self.items().iter().find(|item| item.is_named(name))
    }

    fn contains_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    fn item_names(&self) -> Vec<String> {
        self.items().iter().map(|item| item.name.clone()).collect()
    }
}

/// Removes the named item from a vector of items, preserving the order of the rest.
pub(crate) fn take_named(items: &mut Vec<Item>, name: &str) -> Option<Item> {
    let idx = items.iter().position(|item| item.is_named(name))?;
    Some(items.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_defaults_match_variant() {
        let key = Item::with_kind("temple key", "Ornate.", ItemKind::Key {
            unlocks: "inner temple".into(),
        });
        assert!(key.usable);
        assert_eq!(key.value, 25);

        let machete = Item::with_kind("machete", "Sharp.", ItemKind::Weapon { damage: 15 });
        assert_eq!(machete.value, 30);

        let crystals = Item::with_kind("crystals", "Glowing.", ItemKind::Treasure);
        assert!(!crystals.usable);
    }

    #[test]
    fn using_items_by_kind() {
        let herbs = Item::with_kind("herbs", "Medicinal.", ItemKind::Consumable { heal: 25 });
        let outcome = herbs.use_item();
        assert_eq!(outcome.consumed_heal, Some(25));
        assert!(outcome.message.contains("feel refreshed"));

        let key = Item::with_kind("rusty key", "Old.", ItemKind::Key { unlocks: "chest".into() });
        let outcome = key.use_item();
        assert_eq!(outcome.consumed_heal, None);
        assert_eq!(outcome.message, "You hold up the rusty key. It might unlock chest.");

        let machete = Item::with_kind("machete", "Sharp.", ItemKind::Weapon { damage: 15 });
        assert!(machete.use_item().message.contains("It deals 15 damage."));

        let shell = Item::new("seashell", "A shell.");
        assert_eq!(shell.use_item().message, "You can't use that.");
    }

    #[test]
    fn examine_annotations() {
        let mut vine = Item::new("vine", "A strong vine.");
        vine.usable = true;
        vine.value = 15;
        let lines = vine.examine();
        assert_eq!(lines[0], "A strong vine.");
        assert!(lines.contains(&"This item appears to be worth 15 gold.".to_string()));
        assert!(lines.contains(&"You can take this item.".to_string()));
        assert!(lines.contains(&"This item can be used.".to_string()));

        let mut idol = Item::with_kind("idol", "Golden.", ItemKind::Treasure);
        idol.value = 100;
        let lines = idol.examine();
        assert!(lines[1].starts_with("This treasure is worth 100 gold!"));
        assert_eq!(lines.last().map(String::as_str), Some("You can take this valuable item."));
    }

    #[test]
    fn names_match_case_insensitively() {
        let item = Item::new("temple key", "Ornate.");
        assert!(item.is_named("Temple Key"));
        assert!(!item.is_named("temple"));
    }

    #[test]
    fn take_named_removes_only_match() {
        let mut items = vec![Item::new("a", ""), Item::new("b", ""), Item::new("c", "")];
        let taken = take_named(&mut items, "b").map(|i| i.name);
        assert_eq!(taken.as_deref(), Some("b"));
        assert_eq!(items.iter().map(Item::name).collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(take_named(&mut items, "b").is_none());
    }

    #[test]
    fn def_overrides_apply() {
        let def = ItemDef {
            name: "crystals".into(),
            desc: "Glowing.".into(),
            room: 6,
            kind: ItemKindDef::Treasure,
            portable: true,
            usable: Some(true),
            value: Some(50),
        };
        let item = Item::from_def(&def);
        assert!(!item.usable, "treasure never becomes usable");
        assert_eq!(item.value, 50);
        assert_eq!(item.kind.to_string(), "Treasure");
    }
}
