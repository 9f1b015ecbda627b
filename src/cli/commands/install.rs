//! The `install` command: run the ten installation steps.

use std::time::Instant;

use crate::cli::{Cli, InstallArgs};
use crate::config;
use crate::error::Result;
use crate::gateway::HostGateway;
use crate::runner;
use crate::steps::InstallOptions;
use crate::ui::UserInterface;

use super::CommandOutcome;

pub fn run(cli: &Cli, args: &InstallArgs, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
    let config = config::load(cli.config.as_deref())?;

    let options = InstallOptions {
        dry_run: args.dry_run,
        on_existing: args.conflict_policy(),
    };

    ui.show_header(&format!("outpost · installing {}", config.service));
    if args.dry_run {
        ui.info("dry-run mode: describing steps without executing them");
    }

    let gateway = HostGateway::new();
    let start = Instant::now();
    let reports = runner::run_install(&config, &gateway, ui, &options);
    let summary = runner::summarize(&reports, start.elapsed());

    ui.show_run_summary(&summary);

    if summary.success && !args.dry_run {
        ui.show_hint(&format!(
            "follow live logs with: journalctl -u {} -f",
            config.unit_name()
        ));
    }

    Ok(CommandOutcome::with_code(runner::exit_code(&reports)))
}
