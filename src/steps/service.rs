//! Systemd unit registration, enablement, start, and verification.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{StepContext, StepOutcome};

/// Symlink the unit file from the checkout into the systemd unit
/// directory and reload the unit cache.
///
/// The target path is cleared first: an existing symlink is removed
/// (re-linking is idempotent), an existing regular file is renamed aside
/// with a timestamp suffix so its content stays recoverable. Any
/// sub-action failure short-circuits the rest of the step.
pub fn register_unit(ctx: &mut StepContext) -> StepOutcome {
    let source = ctx.config.unit_source();
    let target = ctx.config.unit_target();

    if ctx.options.dry_run {
        ctx.ui.info(&format!(
            "would link {} -> {} and reload units",
            target.display(),
            source.display()
        ));
        return StepOutcome::Success;
    }

    if !source.exists() {
        return StepOutcome::Failed(format!(
            "unit file {} not found in checkout",
            source.display()
        ));
    }

    match fs::symlink_metadata(&target) {
        Ok(meta) if meta.file_type().is_symlink() => {
            if let Err(e) = fs::remove_file(&target) {
                return StepOutcome::Failed(format!(
                    "could not remove existing symlink {}: {}",
                    target.display(),
                    e
                ));
            }
        }
        Ok(meta) if meta.is_file() => {
            let backup = backup_path(&target);
            if let Err(e) = fs::rename(&target, &backup) {
                return StepOutcome::Failed(format!(
                    "could not move {} aside: {}",
                    target.display(),
                    e
                ));
            }
            ctx.ui.warning(&format!(
                "existing unit file moved to {}",
                backup.display()
            ));
        }
        Ok(_) => {
            return StepOutcome::Failed(format!(
                "{} is occupied by a directory",
                target.display()
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return StepOutcome::Failed(format!(
                "could not inspect {}: {}",
                target.display(),
                e
            ));
        }
    }

    if let Err(e) = make_symlink(&source, &target) {
        return StepOutcome::Failed(format!(
            "could not link {}: {}",
            target.display(),
            e
        ));
    }

    match ctx.gateway.daemon_reload() {
        Ok(result) if result.success => {
            ctx.ui
                .success(&format!("unit {} registered", ctx.config.unit_name()));
            StepOutcome::Success
        }
        Ok(result) => StepOutcome::Failed(format!(
            "daemon-reload failed: {}",
            result.error_trailer().unwrap_or("unknown error")
        )),
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}

/// Enable the unit on boot. Already-enabled units are a warning no-op.
pub fn enable_unit(ctx: &mut StepContext) -> StepOutcome {
    let unit = ctx.config.unit_name();

    if ctx.options.dry_run {
        ctx.ui.info(&format!("would enable {}", unit));
        return StepOutcome::Success;
    }

    if ctx.gateway.unit_is_enabled(&unit) {
        ctx.ui.warning(&format!("{} already enabled", unit));
        return StepOutcome::Warning("already enabled".to_string());
    }

    match ctx.gateway.enable_unit(&unit) {
        Ok(result) if result.success => {
            ctx.ui.success(&format!("{} enabled on boot", unit));
            StepOutcome::Success
        }
        Ok(result) => StepOutcome::Failed(format!(
            "enable failed: {}",
            result.error_trailer().unwrap_or("unknown error")
        )),
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}

/// Start the unit — or restart it if it is already running, so a re-run
/// picks up a replaced checkout. Both paths lead to the same
/// postcondition: the unit is active.
pub fn start_unit(ctx: &mut StepContext) -> StepOutcome {
    let unit = ctx.config.unit_name();

    if ctx.options.dry_run {
        ctx.ui.info(&format!("would start {}", unit));
        return StepOutcome::Success;
    }

    let (action, result) = if ctx.gateway.unit_is_active(&unit) {
        ("restart", ctx.gateway.restart_unit(&unit))
    } else {
        ("start", ctx.gateway.start_unit(&unit))
    };

    match result {
        Ok(result) if result.success => {
            ctx.ui.success(&format!("{} {}ed", unit, action));
            StepOutcome::Success
        }
        Ok(result) => StepOutcome::Failed(format!(
            "{} failed: {}",
            action,
            result.error_trailer().unwrap_or("unknown error")
        )),
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}

/// Display the unit's live status verbatim, then re-check activity for
/// the boolean outcome. The display itself never fails the step.
pub fn verify_unit(ctx: &mut StepContext) -> StepOutcome {
    let unit = ctx.config.unit_name();

    if ctx.options.dry_run {
        ctx.ui.info(&format!("would query status of {}", unit));
        return StepOutcome::Success;
    }

    match ctx.gateway.unit_status(&unit) {
        Ok(result) => {
            let status = result.stdout.trim_end();
            if !status.is_empty() {
                ctx.ui.message(status);
            }
        }
        Err(e) => {
            ctx.ui
                .warning(&format!("could not query status of {}: {}", unit, e));
        }
    }

    if ctx.gateway.unit_is_active(&unit) {
        ctx.ui.success(&format!("{} is active", unit));
        StepOutcome::Success
    } else {
        StepOutcome::Failed(format!("{} is not active", unit))
    }
}

/// Timestamp-suffixed sibling path for backing up a regular file.
fn backup_path(target: &Path) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let name = target
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unit");
    target.with_file_name(format!("{}.bak-{}", name, stamp))
}

#[cfg(unix)]
fn make_symlink(source: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, target)
}

#[cfg(not(unix))]
fn make_symlink(_source: &Path, _target: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks require a unix host",
    ))
}
