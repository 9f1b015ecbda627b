//! The ten installation steps.
//!
//! Each step is a named operation with an internal check-then-act
//! pattern: is the goal state already present? If so, report a warning
//! no-op; if not, perform the action and report the outcome. Steps never
//! abort the run — the orchestrator in [`crate::runner`] executes all of
//! them regardless of earlier failures and aggregates the results.

pub mod group;
pub mod packages;
pub mod preflight;
pub mod python_deps;
pub mod repo;
pub mod service;

pub use repo::{ConflictChoice, ConflictPolicy};

use std::time::Duration;

use crate::config::InstallConfig;
use crate::gateway::SystemGateway;
use crate::ui::UserInterface;

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step performed its action and reached the goal state.
    Success,
    /// The goal state was already present; nothing was done.
    Warning(String),
    /// The step could not reach the goal state.
    Failed(String),
}

impl StepOutcome {
    /// Whether this outcome counts against the run.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether this outcome was an idempotent no-op.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    /// The outcome's detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Warning(detail) | Self::Failed(detail) => Some(detail),
        }
    }
}

/// One step's result, as collected by the orchestrator.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Step name (fixed, see [`crate::runner::STEPS`]).
    pub name: String,
    /// Outcome the step resolved to.
    pub outcome: StepOutcome,
    /// Wall-clock duration of the step.
    pub duration: Duration,
}

/// Options that vary per invocation (flags, not manifest).
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Describe effects without executing them.
    pub dry_run: bool,
    /// How to resolve an existing install directory.
    pub on_existing: ConflictPolicy,
}

/// Everything a step needs to run.
pub struct StepContext<'a> {
    pub config: &'a InstallConfig,
    pub gateway: &'a dyn SystemGateway,
    pub ui: &'a mut dyn UserInterface,
    pub options: &'a InstallOptions,
}
