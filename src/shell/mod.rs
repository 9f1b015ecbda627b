//! Process execution and host environment checks.

pub mod command;
pub mod platform;

pub use command::{run, run_check, CommandResult};
pub use platform::{is_ci, is_elevated};
