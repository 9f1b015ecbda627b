//! Command dispatch.

pub mod completions;
pub mod install;
pub mod status;

use crate::cli::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// What a command resolved to, beyond its printed output.
#[derive(Debug, Clone, Copy)]
pub struct CommandOutcome {
    /// Process exit code the command asks for.
    pub exit_code: i32,
}

impl CommandOutcome {
    /// A clean exit.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// An exit with a specific code.
    pub fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Routes a parsed [`Cli`] to its command implementation.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Dispatch the parsed command line. No subcommand means `install`,
    /// mirroring the one-shot script this tool replaces.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
        match &cli.command {
            Some(Commands::Install(args)) => install::run(cli, args, ui),
            Some(Commands::Status(args)) => status::run(cli, args, ui),
            Some(Commands::Completions(args)) => completions::run(args),
            None => install::run(cli, &InstallArgs::default(), ui),
        }
    }
}
