//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next turn. Variants contain different
//! payloads, depending the type of information that needs to be displayed.

use variantly::Variantly;

use crate::health::HealthState;
use crate::loader::help::HelpCommand;
use crate::view::{ContentLine, RoomItemLine, Section};

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    CharacterDeath {
        name: String,
        score: usize,
    },
    CharacterHarmed {
        name: String,
        amount: u32,
        /// the severity message for the resulting health band
        band: String,
    },
    CharacterHealed {
        name: String,
        amount: u32,
        health: HealthState,
    },
    EngineMessage(String),
    Error(String),
    FlagList(Vec<(String, bool)>),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory {
        items: Vec<ContentLine>,
        capacity: usize,
    },
    ItemDescription {
        name: String,
        lines: Vec<String>,
    },
    PlayerStatus {
        name: String,
        health: HealthState,
        condition: String,
        carried: usize,
        capacity: usize,
    },
    PointsAwarded {
        amount: usize,
        reason: String,
    },
    QuitSummary {
        title: String,
        score: usize,
        visited: usize,
        max_visited: usize,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<String>),
    RoomItems(Vec<RoomItemLine>),
    Score(usize),
    TransitionMessage(String),
    Victory(Vec<String>),
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. } | ViewItem::RoomItems(_) | ViewItem::RoomExits(_) => {
                Section::Environment
            },
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::Inventory { .. }
            | ViewItem::PlayerStatus { .. } => Section::DirectResult,
            ViewItem::CharacterHarmed { .. }
            | ViewItem::CharacterHealed { .. }
            | ViewItem::CharacterDeath { .. }
            | ViewItem::PointsAwarded { .. }
            | ViewItem::Victory(_) => Section::WorldResponse,
            ViewItem::EngineMessage(_)
            | ViewItem::FlagList(_)
            | ViewItem::Help { .. }
            | ViewItem::QuitSummary { .. }
            | ViewItem::Score(_) => Section::System,
            ViewItem::TransitionMessage(_) => Section::Transition,
        }
    }

    pub fn default_priority(&self) -> isize {
        match &self {
            ViewItem::CharacterHarmed { .. } => -20,
            ViewItem::CharacterHealed { .. } => -10,
            ViewItem::Victory(_) => 50,
            ViewItem::CharacterDeath { .. } => 100,
            _ => 0,
        }
    }
}
