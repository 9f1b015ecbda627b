//! The `status` command: query and display the service's live state.

use crate::cli::{Cli, StatusArgs};
use crate::config::{self, InstallConfig};
use crate::error::{OutpostError, Result};
use crate::gateway::{HostGateway, SystemGateway};
use crate::ui::UserInterface;

use super::CommandOutcome;

pub fn run(cli: &Cli, args: &StatusArgs, ui: &mut dyn UserInterface) -> Result<CommandOutcome> {
    let config = config::load(cli.config.as_deref())?;
    let gateway = HostGateway::new();
    run_with(&config, &gateway, args, ui)
}

/// Command body, separated from gateway construction for testability.
pub fn run_with(
    config: &InstallConfig,
    gateway: &dyn SystemGateway,
    args: &StatusArgs,
    ui: &mut dyn UserInterface,
) -> Result<CommandOutcome> {
    let unit = config.unit_name();
    let active = gateway.unit_is_active(&unit);
    let enabled = gateway.unit_is_enabled(&unit);

    if args.json {
        let doc = serde_json::json!({
            "unit": unit,
            "active": active,
            "enabled": enabled,
        });
        let rendered =
            serde_json::to_string_pretty(&doc).map_err(|e| OutpostError::Other(e.into()))?;
        ui.message(&rendered);
    } else {
        match gateway.unit_status(&unit) {
            Ok(result) => {
                let status = result.stdout.trim_end();
                if !status.is_empty() {
                    ui.message(status);
                }
            }
            Err(e) => {
                ui.warning(&format!("could not query status of {}: {}", unit, e));
            }
        }

        if active {
            ui.success(&format!("{} is active", unit));
        } else {
            ui.warning(&format!("{} is not active", unit));
        }
    }

    // systemctl's is-active convention: 0 when active, 3 when not.
    Ok(CommandOutcome::with_code(if active { 0 } else { 3 }))
}
