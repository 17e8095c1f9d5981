//! Player -- the castaway exploring the island.
use log::info;

use crate::health::{HealthBand, HealthState, LifeState};
use crate::item::{InventoryFull, Item, ItemHolder, take_named};

/// The single player character of a session.
#[derive(Debug)]
pub struct Player {
    pub name: String,
    pub health: HealthState,
    pub inventory: Vec<Item>,
    pub capacity: usize,
}
impl Default for Player {
    fn default() -> Player {
        Player::new("Adventurer", 100, 10)
    }
}
impl Player {
    /// Create a player at full health with an empty inventory.
    pub fn new(name: &str, max_hp: u32, capacity: usize) -> Player {
        Player {
            name: name.to_string(),
            health: HealthState::new_at_max(max_hp),
            inventory: Vec::new(),
            capacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Restore health, never beyond the maximum. Returns HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        let restored = self.health.heal(amount);
        info!(
            "{} healed +{restored} hp ({}/{})",
            self.name,
            self.health.current_hp(),
            self.health.max_hp()
        );
        restored
    }

    /// Reduce health, never below zero, and report the resulting severity band.
    pub fn take_damage(&mut self, amount: u32) -> HealthBand {
        if amount > 0 {
            self.health.damage(amount);
            info!(
                "{} damaged -{amount} hp ({}/{})",
                self.name,
                self.health.current_hp(),
                self.health.max_hp()
            );
        }
        self.health.band()
    }

    pub fn is_alive(&self) -> bool {
        self.health.life_state() == LifeState::Alive
    }

    pub fn is_full(&self) -> bool {
        self.inventory.len() >= self.capacity
    }

    /// Short condition label for the `status` command.
    pub fn status_label(&self) -> &'static str {
        self.health.condition()
    }
}
impl ItemHolder for Player {
    fn items(&self) -> &[Item] {
        &self.inventory
    }

    fn add_item(&mut self, item: Item) -> Result<(), InventoryFull> {
        if self.is_full() {
            return Err(InventoryFull {
                item,
                capacity: self.capacity,
            });
        }
        self.inventory.push(item);
        Ok(())
    }

    fn remove_item(&mut self, name: &str) -> Option<Item> {
        take_named(&mut self.inventory, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_respects_capacity() {
        let mut player = Player::new("Tester", 100, 2);
        player.add_item(Item::new("a", "")).expect("room for a");
        player.add_item(Item::new("b", "")).expect("room for b");
        let rejected = player.add_item(Item::new("c", "")).expect_err("inventory is full");
        assert_eq!(rejected.item.name, "c");
        assert_eq!(rejected.capacity, 2);
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn remove_transfers_ownership_out() {
        let mut player = Player::default();
        player.add_item(Item::new("torch", "")).expect("room");
        assert!(player.remove_item("map").is_none());
        let torch = player.remove_item("torch").expect("torch is held");
        assert_eq!(torch.name, "torch");
        assert!(!player.contains_item("torch"));
    }

    #[test]
    fn health_is_clamped() {
        let mut player = Player::default();
        assert_eq!(player.heal(10), 0);
        assert_eq!(player.take_damage(60), HealthBand::Hurt);
        assert_eq!(player.heal(0), 0);
        assert_eq!(player.heal(25), 25);
        assert_eq!(player.health.current_hp(), 65);
        assert_eq!(player.take_damage(200), HealthBand::Dead);
        assert_eq!(player.health.current_hp(), 0);
        assert!(!player.is_alive());
    }
}
