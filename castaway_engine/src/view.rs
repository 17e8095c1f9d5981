//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

pub mod icons;
mod render_action;
mod render_env;
mod render_health;
mod render_player;
mod render_system;
pub mod view_item;

pub use view_item::ViewItem;

use textwrap::termwidth;

use crate::style::GameStyle as _;

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.push_with_custom_priority(item, None);
    }

    /// Push a `ViewItem` honoring an optional custom priority override.
    pub fn push_with_custom_priority(&mut self, item: ViewItem, priority: Option<isize>) {
        self.items.push(ViewEntry {
            section: item.section(),
            priority: item.default_priority(),
            custom_priority: priority,
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// True if any entry buffered for this frame matches the predicate.
    pub fn contains(&self, predicate: impl Fn(&ViewItem) -> bool) -> bool {
        self.items.iter().any(|entry| predicate(&entry.view_item))
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        // Section Zero: Movement transition message, if any
        render_env::transition(self);

        // First Section: Environment / Frame of Reference
        if self.has_section(Section::Environment) {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        // Second Section: Immediate / direct results of player command
        if self.has_section(Section::DirectResult) {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        // Third Section: World reaction to the command (health, points, endings)
        if self.has_section(Section::WorldResponse) {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.world_reaction();
        }
        // Fourth Section: System Commands (help, score, quit etc)
        if self.has_section(Section::System) {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        // clear the buffer for the next turn
        self.items.clear();

        // create a little space before the next prompt
        println!();
    }

    fn has_section(&self, section: Section) -> bool {
        self.items.iter().any(|entry| entry.section == section)
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn environment(&mut self) {
        render_env::room_description(self);
        render_env::room_item_list(self);
        render_env::room_exit_list(self);
    }

    fn direct_results(&mut self) {
        render_action::item_detail(self);
        render_player::inventory(self);
        render_player::player_status(self);

        // successes / failures
        render_action::action_success(self);
        render_action::action_failure(self);
        render_action::errors(self);
    }

    /// Collect world reaction-type entries, sort, and display them in batches (`bucket`) according to priority view order.
    fn world_reaction(&mut self) {
        let world_entries = self.world_entries_sorted();
        if world_entries.is_empty() {
            return;
        }

        let mut current_priority: Option<isize> = None;
        let mut bucket: Vec<&ViewEntry> = Vec::new();
        for entry in world_entries {
            let priority = entry.effective_priority();
            if current_priority.is_some_and(|p| p != priority) {
                Self::render_world_bucket(&bucket);
                bucket.clear();
            }
            bucket.push(entry);
            current_priority = Some(priority);
        }
        if !bucket.is_empty() {
            Self::render_world_bucket(&bucket);
        }
    }

    /// Display a collection of view entries that have the same effective priority.
    fn render_world_bucket(entries: &[&ViewEntry]) {
        if entries.is_empty() {
            return;
        }
        render_health::character_harmed(entries);
        render_health::character_healed(entries);
        render_health::points_awarded(entries);
        render_health::victory(entries);
        render_health::character_death(entries);
    }

    /// Filter all `ViewEntry`s for this frame, retaining only those in the `WorldResponse` section and sort them
    /// by effective priority (lowest priority value shows first, e.g. 1 goes before 10, -10 goes before 1).
    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut world_entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|entry| entry.section == Section::WorldResponse)
            .collect();
        world_entries.sort_by(|a, b| {
            a.effective_priority()
                .cmp(&b.effective_priority())
                .then_with(|| a.sequence.cmp(&b.sequence))
        });
        world_entries
    }

    fn system(&mut self) {
        render_system::show_help(self);
        render_system::score(self);
        render_system::flag_list(self);
        render_system::engine_message(self);
        render_system::quit_summary(self);
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Movement text shown ahead of everything else.
    Transition,
    /// Room description, items and exits.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Follow-up reactions: healing, harm, points, win or death.
    WorldResponse,
    /// Meta/game-system feedback (help, score, quit etc.).
    System,
}

/// Wrapper for a `ViewItem` to allow flexible ordering of display items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub priority: isize,
    pub custom_priority: Option<isize>,
    pub view_item: ViewItem,
    pub sequence: usize,
}

impl ViewEntry {
    /// Returns an overriding custom display priority if one is set, otherwise the base value.
    fn effective_priority(&self) -> isize {
        self.custom_priority.unwrap_or(self.priority)
    }
}

/// Row data for the player's inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub item_name: String,
    pub value: u32,
}

/// Row data for the item listing portion of a room description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomItemLine {
    pub name: String,
    pub takeable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthState;

    #[test]
    fn world_entries_sorted_respects_custom_priority() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("ignored".into()));
        view.push(ViewItem::PointsAwarded {
            amount: 10,
            reason: "Took the seashell".into(),
        });
        view.push_with_custom_priority(
            ViewItem::CharacterDeath {
                name: "Tester".into(),
                score: 10,
            },
            Some(-25),
        );
        view.push(ViewItem::CharacterHealed {
            name: "Tester".into(),
            amount: 5,
            health: HealthState::new_at_max(100),
        });

        let ordered: Vec<&str> = view
            .world_entries_sorted()
            .iter()
            .map(|entry| match &entry.view_item {
                ViewItem::CharacterDeath { .. } => "death",
                ViewItem::CharacterHealed { .. } => "healed",
                ViewItem::PointsAwarded { .. } => "points",
                other => panic!("Unexpected ViewItem in results: {other:?}"),
            })
            .collect();

        assert_eq!(ordered, vec!["death", "healed", "points"]);
    }

    #[test]
    fn world_entries_sorted_excludes_other_sections() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("direct result".into()));
        view.push(ViewItem::Score(40));
        view.push(ViewItem::Victory(vec!["You win.".into()]));

        let entries = view.world_entries_sorted();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0].view_item, ViewItem::Victory(_)));
    }

    #[test]
    fn victory_shows_before_death_by_default() {
        let mut view = View::new();
        view.push(ViewItem::CharacterDeath {
            name: "Tester".into(),
            score: 0,
        });
        view.push(ViewItem::Victory(Vec::new()));
        let entries = view.world_entries_sorted();
        assert!(entries[0].view_item.is_victory());
        assert!(entries[1].view_item.is_character_death());
    }
}
