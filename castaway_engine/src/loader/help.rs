//! module `loader::help`
//!
//! Help screen content: a free-text intro plus a TOML table of commands.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// One line of the help screen: the command as typed and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Complete help data including basic text and commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpData {
    pub basic_text: String,
    pub commands: Vec<HelpCommand>,
}

/// Loads help commands from a TOML file
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let wrapper: HelpCommandFile =
        toml::from_str(&help_file).with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!(
        "{} help commands loaded from '{}'",
        wrapper.commands.len(),
        toml_path.display()
    );

    Ok(wrapper.commands)
}

/// Loads basic help text from a text file
/// # Errors
/// - on file IO error
pub fn load_help_basic_text(text_path: &Path) -> Result<String> {
    let basic_text = fs::read_to_string(text_path)
        .with_context(|| format!("reading basic help text from '{}'", text_path.display()))?;

    info!("Basic help text loaded from '{}'", text_path.display());

    Ok(basic_text.trim().to_string())
}

/// Loads complete help data from both text and TOML files
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_data(basic_text_path: &Path, commands_toml_path: &Path) -> Result<HelpData> {
    let basic_text = load_help_basic_text(basic_text_path).context("while loading basic help text")?;
    let commands = load_help_commands(commands_toml_path).context("while loading help commands")?;

    Ok(HelpData { basic_text, commands })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn shipped_help_files_load() {
        let help_data = load_help_data(Path::new("data/help_basic.txt"), Path::new("data/help_commands.toml"))
            .expect("help data loads");

        assert!(help_data.basic_text.contains("commands listed below"));
        let command_names: Vec<&str> = help_data.commands.iter().map(|cmd| cmd.command.as_str()).collect();
        for expected in ["help", "look", "inventory", "status", "score", "quit"] {
            assert!(
                command_names.iter().any(|name| name.starts_with(expected)),
                "missing help entry for '{expected}'"
            );
        }
        assert!(help_data.commands.iter().all(|cmd| !cmd.description.is_empty()));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"[[commands]]\ncommand = \"look\"\n").expect("write");
        let err = load_help_commands(file.path()).expect_err("description is required");
        assert!(format!("{err:#}").contains("parsing help commands"));
    }
}
