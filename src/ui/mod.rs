//! Terminal output, prompts, and spinners.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use outpost::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("outpost");
//! ui.success("installation complete");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, OutpostTheme};

use std::time::Duration;

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a raw line (verbatim passthrough, no severity prefix).
    fn message(&mut self, msg: &str);

    /// Display an informational status line.
    fn info(&mut self, msg: &str);

    /// Display a success status line.
    fn success(&mut self, msg: &str);

    /// Display a warning status line.
    fn warning(&mut self, msg: &str);

    /// Display an error status line.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. `key` identifies the question for
    /// non-interactive overrides and test assertions.
    fn confirm(&mut self, key: &str, question: &str, default: bool) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Announce a step ("[3/10] register unit").
    fn show_step(&mut self, current: usize, total: usize, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Show the final run summary.
    fn show_run_summary(&mut self, summary: &RunSummary);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Mark as a no-op (goal state already present).
    fn finish_warning(&mut self, msg: &str);
}

/// One step's line in the final summary.
#[derive(Debug, Clone)]
pub struct StepSummary {
    /// Step name.
    pub name: String,
    /// Final status.
    pub status: StatusKind,
    /// Execution duration, if the step ran.
    pub duration: Option<Duration>,
    /// Outcome detail (no-op reason or failure message).
    pub detail: Option<String>,
}

/// Aggregate result of an installation run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Per-step results, in execution order.
    pub step_results: Vec<StepSummary>,
    /// Wall-clock duration of the whole run.
    pub total_duration: Duration,
    /// Steps that were idempotent no-ops.
    pub warnings: usize,
    /// Names of failed steps, in execution order.
    pub failed_steps: Vec<String>,
    /// True when no step failed.
    pub success: bool,
}

/// Format a duration for humans: `500ms`, `5.3s`, `1m 5s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_formats_correctly() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn run_summary_carries_step_results() {
        let summary = RunSummary {
            step_results: vec![StepSummary {
                name: "packages".to_string(),
                status: StatusKind::Success,
                duration: Some(Duration::from_secs(2)),
                detail: None,
            }],
            total_duration: Duration::from_secs(2),
            warnings: 0,
            failed_steps: vec![],
            success: true,
        };
        assert!(summary.success);
        assert_eq!(summary.step_results.len(), 1);
    }
}
