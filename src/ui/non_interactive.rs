//! Non-interactive UI for CI/headless environments.
//!
//! Output uses bracketed level prefixes (`[info]`, `[ok]`, `[warn]`,
//! `[FAIL]`) instead of icons so piped logs stay grep-able. Prompts are
//! never shown: `confirm` resolves to its default with a warning, which
//! keeps unattended runs moving.

use crate::error::Result;

use super::{
    format_duration, OutputMode, RunSummary, SpinnerHandle, StatusKind, UserInterface,
};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Info.format_plain(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Success.format_plain(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", StatusKind::Warning.format_plain(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Failed.format_plain(msg));
    }

    fn confirm(&mut self, key: &str, _question: &str, default: bool) -> Result<bool> {
        tracing::debug!("confirm '{}' resolved to default {}", key, default);
        Ok(default)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(PlainSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_step(&mut self, current: usize, total: usize, title: &str) {
        if self.mode.shows_status() {
            println!("[{}/{}] {}", current, total, title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("  {}", hint);
        }
    }

    fn show_run_summary(&mut self, summary: &RunSummary) {
        if !self.mode.shows_status() {
            return;
        }

        println!();
        println!("  ┌─ Summary ──────────────────────────");

        for step in &summary.step_results {
            let prefix = step.status.bracketed();
            let duration_str = step.duration.map(format_duration).unwrap_or_default();
            let detail_str = step.detail.as_deref().unwrap_or("");

            let right_side = if !detail_str.is_empty() {
                detail_str.to_string()
            } else {
                duration_str
            };

            println!("  │ {} {:<14} {}", prefix, step.name, right_side);
        }

        println!("  ├────────────────────────────────────");
        println!(
            "  │ Total: {} · {} ok · {} no-op · {} failed",
            format_duration(summary.total_duration),
            summary.step_results.len() - summary.warnings - summary.failed_steps.len(),
            summary.warnings,
            summary.failed_steps.len(),
        );
        println!("  └────────────────────────────────────");

        if summary.success {
            println!("  {}", StatusKind::Success.format_plain("Installation complete!"));
        } else {
            eprintln!(
                "  {}",
                StatusKind::Failed.format_plain(&format!(
                    "Installation finished with {} failed step(s): {}",
                    summary.failed_steps.len(),
                    summary.failed_steps.join(", ")
                ))
            );
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints nothing while running (for non-interactive mode).
struct PlainSpinner;

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("{}", StatusKind::Success.format_plain(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        println!("{}", StatusKind::Failed.format_plain(msg));
    }

    fn finish_warning(&mut self, msg: &str) {
        println!("{}", StatusKind::Warning.format_plain(msg));
    }
}
