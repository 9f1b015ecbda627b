//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::steps::ConflictPolicy;

/// Outpost - daemon installation and service registration automation.
#[derive(Debug, Parser)]
#[command(name = "outpost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the install manifest (overrides outpost.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the installation (default if no command specified)
    Install(InstallArgs),

    /// Show the service's live status
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Preview the steps without executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; conflicts resolve to their defaults
    #[arg(long)]
    pub non_interactive: bool,

    /// How to treat an existing install directory
    #[arg(long, value_enum)]
    pub on_existing: Option<OnExisting>,
}

/// Resolution for an existing install directory, as a flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnExisting {
    /// Keep the existing checkout untouched
    Reuse,
    /// Delete the existing checkout and clone fresh
    Replace,
}

impl InstallArgs {
    /// The conflict policy these flags resolve to.
    pub fn conflict_policy(&self) -> ConflictPolicy {
        match self.on_existing {
            Some(OnExisting::Reuse) => ConflictPolicy::Reuse,
            Some(OnExisting::Replace) => ConflictPolicy::Replace,
            None => ConflictPolicy::Ask,
        }
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
