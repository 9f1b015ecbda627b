//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InstallArgs, OnExisting, StatusArgs};
pub use commands::{CommandDispatcher, CommandOutcome};
