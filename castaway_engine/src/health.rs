//! Health Module
//!
//! Hit points for the player character and the cosmetic banding used in
//! status reports.
use std::cmp;
use std::fmt::Display;

/// Current and maximum hit points. `current_hp` always stays in `0..=max_hp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthState {
    max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the character. Saturates at max health. Returns the HP actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = cmp::min(self.max_hp, self.current_hp.saturating_add(amount));
        self.current_hp - before
    }

    /// Severity band of the current HP.
    pub fn band(&self) -> HealthBand {
        match self.current_hp {
            0 => HealthBand::Dead,
            1..=20 => HealthBand::BadlyInjured,
            21..=50 => HealthBand::Hurt,
            _ => HealthBand::Healthy,
        }
    }

    /// Descriptive condition relative to max HP, as shown on the status screen.
    pub fn condition(&self) -> &'static str {
        let max = u64::from(self.max_hp.max(1));
        // compare in tenths of max HP to avoid float rounding
        let tenths = u64::from(self.current_hp) * 10 / max;
        match (self.current_hp, tenths) {
            (hp, _) if hp == self.max_hp => "Perfect health",
            (0, _) => "Unconscious",
            (_, 8..) => "Slightly injured",
            (_, 6..) => "Moderately injured",
            (_, 4..) => "Badly injured",
            (_, 2..) => "Severely injured",
            _ => "Critically injured",
        }
    }
}

/// Alive or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Cosmetic severity banding reported after damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Healthy,
    Hurt,
    BadlyInjured,
    Dead,
}
impl Display for HealthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthBand::Healthy => write!(f, "You are still in decent shape."),
            HealthBand::Hurt => write!(f, "You are hurt."),
            HealthBand::BadlyInjured => write!(f, "You are badly injured!"),
            HealthBand::Dead => write!(f, "You have been defeated!"),
        }
    }
}
