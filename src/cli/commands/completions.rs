//! The `completions` command: generate shell completions.

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

use super::CommandOutcome;

pub fn run(args: &CompletionsArgs) -> Result<CommandOutcome> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "outpost", &mut std::io::stdout());
    Ok(CommandOutcome::success())
}
