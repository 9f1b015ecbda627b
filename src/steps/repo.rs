//! Repository fetching: clone-or-reuse with conflict resolution.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::{StepContext, StepOutcome};

/// How to resolve an existing install directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Ask the operator (falls back to reuse when not interactive).
    #[default]
    Ask,
    /// Keep the existing checkout untouched.
    Reuse,
    /// Delete the existing checkout and clone fresh.
    Replace,
}

/// The resolved decision for an existing install directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    ReuseExisting,
    ReplaceFresh,
}

/// Ensure a working copy of the configured repository exists at the
/// configured path. An existing directory is only removed after an
/// explicit decision; if removal fails, the clone is not attempted.
pub fn fetch_repository(ctx: &mut StepContext) -> StepOutcome {
    let dest = ctx.config.install_dir.clone();

    if ctx.options.dry_run {
        ctx.ui.info(&format!(
            "would clone {} into {}",
            ctx.config.repo_url,
            dest.display()
        ));
        return StepOutcome::Success;
    }

    if !dest.exists() {
        return clone_into(ctx, &dest);
    }

    match resolve_conflict(ctx, &dest) {
        Ok(ConflictChoice::ReuseExisting) => {
            ctx.ui.warning(&format!(
                "{} already exists, keeping existing checkout",
                dest.display()
            ));
            StepOutcome::Warning("existing checkout reused".to_string())
        }
        Ok(ConflictChoice::ReplaceFresh) => {
            if let Err(e) = fs::remove_dir_all(&dest) {
                return StepOutcome::Failed(format!(
                    "could not remove {}: {}",
                    dest.display(),
                    e
                ));
            }
            clone_into(ctx, &dest)
        }
        Err(e) => StepOutcome::Failed(format!("conflict prompt failed: {}", e)),
    }
}

fn resolve_conflict(ctx: &mut StepContext, dest: &Path) -> Result<ConflictChoice> {
    match ctx.options.on_existing {
        ConflictPolicy::Reuse => Ok(ConflictChoice::ReuseExisting),
        ConflictPolicy::Replace => Ok(ConflictChoice::ReplaceFresh),
        ConflictPolicy::Ask => {
            if !ctx.ui.is_interactive() {
                return Ok(ConflictChoice::ReuseExisting);
            }
            let question = format!(
                "{} already exists. Delete it and clone fresh?",
                dest.display()
            );
            let replace = ctx.ui.confirm("replace_checkout", &question, false)?;
            Ok(if replace {
                ConflictChoice::ReplaceFresh
            } else {
                ConflictChoice::ReuseExisting
            })
        }
    }
}

fn clone_into(ctx: &mut StepContext, dest: &Path) -> StepOutcome {
    let mut spinner = ctx
        .ui
        .start_spinner(&format!("cloning {}", ctx.config.repo_url));
    match ctx.gateway.clone_repository(&ctx.config.repo_url, dest) {
        Ok(result) if result.success => {
            spinner.finish_success(&format!("checkout ready at {}", dest.display()));
            StepOutcome::Success
        }
        Ok(result) => {
            spinner.finish_error("clone failed");
            StepOutcome::Failed(format!(
                "git clone failed: {}",
                result.error_trailer().unwrap_or("unknown error")
            ))
        }
        Err(e) => {
            spinner.finish_error("clone failed");
            StepOutcome::Failed(e.to_string())
        }
    }
}
