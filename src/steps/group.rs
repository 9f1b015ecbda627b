//! Group membership adjustment.

use super::{StepContext, StepOutcome};

/// Add the daemon account to the configured group. The account must
/// already exist — creating it is the daemon package's job, not ours.
pub fn adjust_membership(ctx: &mut StepContext) -> StepOutcome {
    let account = &ctx.config.account;
    let group = &ctx.config.group;

    if ctx.options.dry_run {
        ctx.ui
            .info(&format!("would add {} to group {}", account, group));
        return StepOutcome::Success;
    }

    if !ctx.gateway.user_exists(account) {
        return StepOutcome::Failed(format!("account '{}' does not exist", account));
    }

    match ctx.gateway.user_groups(account) {
        Ok(groups) if groups.iter().any(|g| g == group) => {
            ctx.ui
                .warning(&format!("{} is already a member of {}", account, group));
            return StepOutcome::Warning(format!("already a member of {}", group));
        }
        Ok(_) => {}
        Err(e) => return StepOutcome::Failed(e.to_string()),
    }

    match ctx.gateway.add_user_to_group(account, group) {
        Ok(result) if result.success => {
            ctx.ui
                .success(&format!("added {} to group {}", account, group));
            StepOutcome::Success
        }
        Ok(result) => StepOutcome::Failed(format!(
            "usermod failed: {}",
            result.error_trailer().unwrap_or("unknown error")
        )),
        Err(e) => StepOutcome::Failed(e.to_string()),
    }
}
