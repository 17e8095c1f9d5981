//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

use crate::dev_command::{DevCommand, parse_dev_command};

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Dev(DevCommand),
    Drop(String),
    Examine(String),
    Help,
    Inventory,
    Look,
    /// A verb that needs a target was given none; holds the canonical verb.
    MissingTarget(String),
    MoveTo(String),
    Quit,
    Score,
    Status,
    Take(String),
    Unknown,
    UseItem(String),
}

/// Expands a single-letter direction alias to its full name.
pub fn expand_direction(word: &str) -> Option<&'static str> {
    match word {
        "n" | "north" => Some("north"),
        "s" | "south" => Some("south"),
        "e" | "east" => Some("east"),
        "w" | "west" => Some("west"),
        "u" | "up" => Some("up"),
        "d" | "down" => Some("down"),
        _ => None,
    }
}

/// Parses an input string and returns the corresponding `Command`.
///
/// Input is case-folded and split on whitespace. The first word picks the
/// action. Item verbs take the remaining words, joined by single spaces, as
/// their target; movement uses only the word after `go`/`move`, and commands
/// without a target ignore anything after the verb.
///
/// ```
/// use castaway_engine::command::{Command, parse_command};
///
/// assert_eq!(parse_command("Take Temple Key"), Command::Take("temple key".into()));
/// assert_eq!(parse_command("n"), Command::MoveTo("north".into()));
/// ```
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    if trimmed.starts_with(':') {
        return parse_dev_command(trimmed).map_or(Command::Unknown, Command::Dev);
    }

    let lowered = trimmed.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Command::Unknown;
    };

    match (verb, rest) {
        (dir, _) if expand_direction(dir).is_some() => {
            Command::MoveTo(expand_direction(dir).unwrap_or(dir).to_string())
        },
        ("go" | "move", []) => Command::MissingTarget("go".into()),
        ("go" | "move", [dir, ..]) => Command::MoveTo(expand_direction(dir).unwrap_or(*dir).to_string()),
        ("look" | "l", []) => Command::Look,
        ("look" | "l", ["at"]) | ("examine" | "inspect", []) => Command::MissingTarget("examine".into()),
        ("look" | "l", ["at", target @ ..]) | ("look" | "l" | "examine" | "inspect", target) => {
            Command::Examine(target.join(" "))
        },
        ("take" | "get" | "pick", []) | ("pick", ["up"]) => Command::MissingTarget("take".into()),
        ("pick", ["up", target @ ..]) | ("take" | "get" | "pick", target) => Command::Take(target.join(" ")),
        ("drop" | "leave", []) => Command::MissingTarget("drop".into()),
        ("drop" | "leave", target) => Command::Drop(target.join(" ")),
        ("use", []) => Command::MissingTarget("use".into()),
        ("use", target) => Command::UseItem(target.join(" ")),
        ("inventory" | "i", _) => Command::Inventory,
        ("status" | "health", _) => Command::Status,
        ("help" | "h", _) => Command::Help,
        ("score", _) => Command::Score,
        ("quit" | "exit" | "q", _) => Command::Quit,
        _ => Command::Unknown,
    }
}
