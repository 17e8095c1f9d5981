#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Engine for *Journey of the Forgotten Island*, a turn-based text
//! exploration game.

pub const CASTAWAY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// True when built with the `dev-mode` feature; enables the ':' developer commands.
pub const DEV_MODE: bool = cfg!(feature = "dev-mode");

// Core modules
pub mod command;
pub mod data_paths;
pub mod dev_command;
pub mod health;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use item::{Item, ItemHolder};
pub use loader::load_world;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{CastawayWorld, GameStatus};
