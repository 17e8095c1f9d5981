//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities:
//! help, score, quitting, and the summary shown when a session ends.

use log::info;

use crate::item::ItemHolder;
use crate::repl::ReplControl;
use crate::world::GameStatus;
use crate::{CastawayWorld, View, ViewItem};

/// Show available commands.
pub fn help_handler(world: &CastawayWorld, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: world.help.basic_text.clone(),
        commands: world.help.commands.clone(),
    });
}

/// Show the running score.
pub fn score_handler(world: &CastawayWorld, view: &mut View) {
    view.push(ViewItem::Score(world.score));
}

/// Ask for confirmation before quitting; the answer arrives with the next line.
pub fn quit_handler(world: &mut CastawayWorld) {
    info!("{} asked to quit", world.player.name());
    world.status = GameStatus::ConfirmingQuit;
}

/// Handle the answer to the quit confirmation. Only "y" / "yes" ends the session.
pub fn confirm_quit_handler(world: &mut CastawayWorld, view: &mut View, answer: &str) -> ReplControl {
    if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        world.status = GameStatus::Quit;
        info!("{} quit with a score of {}", world.player.name(), world.score);
        info!("ending flags:");
        world.flags.iter().for_each(|(name, value)| info!("* {name} = {value}"));
        info!("ending inventory:");
        world.player.items().iter().for_each(|item| info!("- {}", item.name));
        view.push(ViewItem::EngineMessage("Thanks for playing!".to_string()));
        push_summary(world, view, "Farewell, Castaway");
        ReplControl::Quit
    } else {
        world.status = GameStatus::Playing;
        info!("{} decided to keep playing", world.player.name());
        view.push(ViewItem::EngineMessage("Your adventure continues.".to_string()));
        ReplControl::Continue
    }
}

/// Feedback for input that matched no command.
pub fn unknown_handler(view: &mut View) {
    view.push(ViewItem::Error(
        "I don't understand that command. Type 'help' for available commands.".to_string(),
    ));
}

/// Prompt for the missing target of a command like "take".
pub fn missing_target_handler(view: &mut View, verb: &str) {
    let message = match verb {
        "go" => "Go where? Try: go north, go south, go east, go west".to_string(),
        other => {
            let mut chars = other.chars();
            let capitalized: String = chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default();
            format!("{capitalized} what?")
        },
    };
    view.push(ViewItem::ActionFailure(message));
}

/// Push the end-of-game summary: final score and how much of the island was seen.
pub fn push_summary(world: &CastawayWorld, view: &mut View, title: &str) {
    view.push(ViewItem::QuitSummary {
        title: title.to_string(),
        score: world.score,
        visited: world.visited_count(),
        max_visited: world.rooms.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_target_prompts() {
        let mut view = View::new();
        for verb in ["take", "drop", "use", "examine", "go"] {
            missing_target_handler(&mut view, verb);
        }
        let messages: Vec<_> = view
            .items
            .iter()
            .filter_map(|entry| match &entry.view_item {
                ViewItem::ActionFailure(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            messages,
            vec![
                "Take what?",
                "Drop what?",
                "Use what?",
                "Examine what?",
                "Go where? Try: go north, go south, go east, go west"
            ]
        );
    }

    #[test]
    fn quit_needs_yes() {
        let mut world = CastawayWorld::new_empty();
        let mut view = View::new();

        quit_handler(&mut world);
        assert_eq!(world.status, GameStatus::ConfirmingQuit);
        assert!(matches!(
            confirm_quit_handler(&mut world, &mut view, "no"),
            ReplControl::Continue
        ));
        assert_eq!(world.status, GameStatus::Playing);

        quit_handler(&mut world);
        assert!(matches!(
            confirm_quit_handler(&mut world, &mut view, " YES "),
            ReplControl::Quit
        ));
        assert_eq!(world.status, GameStatus::Quit);
        assert!(view.contains(|item| item == &ViewItem::EngineMessage("Thanks for playing!".into())));
        assert!(view.contains(ViewItem::is_quit_summary));
    }
}
