//! Step sequencing and run summary.
//!
//! The orchestrator is deliberately dumb: ten steps in a fixed order,
//! none skipped because an earlier one failed. Each step guards its own
//! preconditions, so a privilege failure up front still lets the
//! remaining steps report precisely what they are missing. The ordered
//! report list drives both the printed summary and the process exit
//! code.

use std::time::{Duration, Instant};

use crate::config::InstallConfig;
use crate::gateway::SystemGateway;
use crate::steps::{self, InstallOptions, StepContext, StepOutcome, StepReport};
use crate::ui::{RunSummary, StatusKind, StepSummary, UserInterface};

type StepFn = fn(&mut StepContext) -> StepOutcome;

/// The ten installation steps in their fixed execution order.
pub const STEPS: [(&str, &str, StepFn); 10] = [
    (
        "privileges",
        "verify root privileges",
        steps::preflight::check_privileges,
    ),
    (
        "network",
        "probe outbound connectivity",
        steps::preflight::check_network,
    ),
    (
        "packages",
        "install OS packages",
        steps::packages::install_packages,
    ),
    (
        "repository",
        "fetch the daemon repository",
        steps::repo::fetch_repository,
    ),
    (
        "python-deps",
        "install Python requirements",
        steps::python_deps::install_requirements,
    ),
    (
        "group",
        "adjust group membership",
        steps::group::adjust_membership,
    ),
    (
        "register",
        "register the systemd unit",
        steps::service::register_unit,
    ),
    ("enable", "enable the unit on boot", steps::service::enable_unit),
    ("start", "start the service", steps::service::start_unit),
    (
        "verify",
        "verify the service is running",
        steps::service::verify_unit,
    ),
];

/// Execute all ten steps in order and collect their reports.
pub fn run_install(
    config: &InstallConfig,
    gateway: &dyn SystemGateway,
    ui: &mut dyn UserInterface,
    options: &InstallOptions,
) -> Vec<StepReport> {
    let total = STEPS.len();
    let mut reports = Vec::with_capacity(total);

    for (index, (name, title, step)) in STEPS.iter().enumerate() {
        ui.show_step(index + 1, total, title);

        let start = Instant::now();
        let outcome = {
            let mut ctx = StepContext {
                config,
                gateway,
                ui: &mut *ui,
                options,
            };
            step(&mut ctx)
        };
        let duration = start.elapsed();

        if let StepOutcome::Failed(detail) = &outcome {
            ui.error(&format!("{}: {}", name, detail));
        }

        tracing::debug!("step {} finished: {:?} in {:?}", name, outcome, duration);

        reports.push(StepReport {
            name: (*name).to_string(),
            outcome,
            duration,
        });
    }

    reports
}

/// Derive the process exit code from the report list: nonzero iff any
/// step failed. Warnings are successes.
pub fn exit_code(reports: &[StepReport]) -> i32 {
    if reports.iter().any(|r| r.outcome.is_failure()) {
        1
    } else {
        0
    }
}

/// Convert the report list into the displayable summary.
pub fn summarize(reports: &[StepReport], total_duration: Duration) -> RunSummary {
    let failed_steps: Vec<String> = reports
        .iter()
        .filter(|r| r.outcome.is_failure())
        .map(|r| r.name.clone())
        .collect();
    let warnings = reports.iter().filter(|r| r.outcome.is_warning()).count();

    RunSummary {
        step_results: reports
            .iter()
            .map(|r| StepSummary {
                name: r.name.clone(),
                status: StatusKind::from(&r.outcome),
                duration: Some(r.duration),
                detail: r.outcome.detail().map(str::to_string),
            })
            .collect(),
        total_duration,
        warnings,
        success: failed_steps.is_empty(),
        failed_steps,
    }
}
