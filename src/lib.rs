//! Outpost - daemon installation and service registration automation.
//!
//! Outpost replaces the ad-hoc `install.sh` that ships with many Linux
//! daemons: it installs OS packages, clones the daemon's repository,
//! installs Python requirements, adjusts group membership, registers the
//! systemd unit, and starts and verifies the service — ten idempotent
//! steps with a declarative YAML manifest and a polished CLI experience.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Install manifest loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`gateway`] - Capability trait over the host's system tools
//! - [`runner`] - Step sequencing and run summary
//! - [`shell`] - Process execution
//! - [`steps`] - The ten installation steps
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use outpost::steps::StepOutcome;
//!
//! // An idempotent no-op counts as success, not failure.
//! let outcome = StepOutcome::Warning("unit already enabled".into());
//! assert!(!outcome.is_failure());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod runner;
pub mod shell;
pub mod steps;
pub mod ui;

pub use error::{OutpostError, Result};
