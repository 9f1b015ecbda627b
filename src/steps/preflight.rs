//! Preflight checks: privileges and connectivity.
//!
//! Both checks are advisory. A failed check is recorded like any other
//! step failure, but the run continues — every later step guards its own
//! preconditions and fails on its own terms.

use std::time::Duration;

use super::{StepContext, StepOutcome};

/// How long the reachability probe waits for a TCP connect.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Verify the process has root privileges.
pub fn check_privileges(ctx: &mut StepContext) -> StepOutcome {
    if ctx.options.dry_run {
        ctx.ui.info("would verify root privileges");
        return StepOutcome::Success;
    }

    if ctx.gateway.is_elevated() {
        ctx.ui.success("running with root privileges");
        StepOutcome::Success
    } else {
        StepOutcome::Failed("not running as root (re-run with sudo)".to_string())
    }
}

/// Verify outbound network reachability with a single bounded probe.
pub fn check_network(ctx: &mut StepContext) -> StepOutcome {
    let addr = &ctx.config.probe_addr;

    if ctx.options.dry_run {
        ctx.ui.info(&format!("would probe {}", addr));
        return StepOutcome::Success;
    }

    if ctx.gateway.probe_connectivity(addr, PROBE_TIMEOUT) {
        ctx.ui.success(&format!("network reachable ({})", addr));
        StepOutcome::Success
    } else {
        StepOutcome::Failed(format!(
            "cannot reach {} within {}s",
            addr,
            PROBE_TIMEOUT.as_secs()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallConfig;
    use crate::gateway::MockGateway;
    use crate::steps::InstallOptions;
    use crate::ui::MockUI;

    #[test]
    fn privileges_pass_when_elevated() {
        let config = InstallConfig::default();
        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert_eq!(check_privileges(&mut ctx), StepOutcome::Success);
        assert!(ui.has_success("root"));
    }

    #[test]
    fn privileges_fail_without_root() {
        let config = InstallConfig::default();
        let gateway = MockGateway::new().with_elevated(false);
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = check_privileges(&mut ctx);
        assert!(outcome.is_failure());
        assert!(outcome.detail().unwrap().contains("sudo"));
    }

    #[test]
    fn network_pass_when_online() {
        let config = InstallConfig::default();
        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert_eq!(check_network(&mut ctx), StepOutcome::Success);
    }

    #[test]
    fn network_fail_when_offline() {
        let config = InstallConfig::default();
        let gateway = MockGateway::new().with_online(false);
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = check_network(&mut ctx);
        assert!(outcome.is_failure());
        assert!(outcome.detail().unwrap().contains("github.com:443"));
    }

    #[test]
    fn dry_run_touches_nothing() {
        let config = InstallConfig::default();
        let gateway = MockGateway::new().with_elevated(false).with_online(false);
        let mut ui = MockUI::new();
        let options = InstallOptions {
            dry_run: true,
            ..Default::default()
        };
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert_eq!(check_privileges(&mut ctx), StepOutcome::Success);
        assert_eq!(check_network(&mut ctx), StepOutcome::Success);
        assert!(gateway.calls().is_empty());
    }
}
