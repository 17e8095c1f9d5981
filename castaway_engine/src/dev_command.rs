//! `dev_command.rs`
//!
//! Parses commands only to be used in developer mode. They are recognized in
//! every build; the REPL refuses to run them unless `DEV_MODE` is set.

/// Developer-only commands, entered with a leading ':'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevCommand {
    Teleport(String),
    Damage(String),
    ListFlags,
}

/// Parse a ':'-prefixed developer command.
pub fn parse_dev_command(input: &str) -> Option<DevCommand> {
    let body = input.strip_prefix(':')?;
    let lowered = body.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["teleport" | "port", room_id] => Some(DevCommand::Teleport((*room_id).into())),
        ["damage" | "hurt", amount] => Some(DevCommand::Damage((*amount).into())),
        ["flags"] => Some(DevCommand::ListFlags),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_colon_prefix() {
        assert_eq!(parse_dev_command("flags"), None);
        assert_eq!(parse_dev_command(":FLAGS"), Some(DevCommand::ListFlags));
        assert_eq!(parse_dev_command(":port 3"), Some(DevCommand::Teleport("3".into())));
        assert_eq!(parse_dev_command(":damage 40"), Some(DevCommand::Damage("40".into())));
        assert_eq!(parse_dev_command(":damage"), None);
    }
}
