//! OS package installation.

use super::{StepContext, StepOutcome};

/// Refresh the package index once, then install each configured package
/// individually. A package that fails to install is recorded and the loop
/// continues; the step aggregates the failures at the end.
pub fn install_packages(ctx: &mut StepContext) -> StepOutcome {
    let packages = &ctx.config.packages;

    if packages.is_empty() {
        ctx.ui.warning("no OS packages configured");
        return StepOutcome::Warning("no OS packages configured".to_string());
    }

    if ctx.options.dry_run {
        ctx.ui.info(&format!(
            "would refresh the package index and install: {}",
            packages.join(", ")
        ));
        return StepOutcome::Success;
    }

    ctx.ui.info("refreshing package index");
    match ctx.gateway.refresh_package_index() {
        Ok(result) if result.success => {}
        Ok(result) => {
            return StepOutcome::Failed(format!(
                "package index refresh failed: {}",
                result.error_trailer().unwrap_or("see apt log")
            ));
        }
        Err(e) => return StepOutcome::Failed(e.to_string()),
    }

    let mut failed: Vec<String> = Vec::new();
    for package in packages {
        let mut spinner = ctx.ui.start_spinner(&format!("installing {}", package));
        match ctx.gateway.install_package(package) {
            Ok(result) if result.success => {
                spinner.finish_success(&format!("{} installed", package));
            }
            Ok(result) => {
                spinner.finish_error(&format!(
                    "{}: {}",
                    package,
                    result.error_trailer().unwrap_or("install failed")
                ));
                failed.push(package.clone());
            }
            Err(e) => {
                spinner.finish_error(&format!("{}: {}", package, e));
                failed.push(package.clone());
            }
        }
    }

    if failed.is_empty() {
        StepOutcome::Success
    } else {
        StepOutcome::Failed(format!("failed to install: {}", failed.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallConfig;
    use crate::gateway::MockGateway;
    use crate::steps::InstallOptions;
    use crate::ui::MockUI;

    fn config_with(packages: &[&str]) -> InstallConfig {
        InstallConfig {
            packages: packages.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn all_packages_install() {
        let config = config_with(&["git", "python3"]);
        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert_eq!(install_packages(&mut ctx), StepOutcome::Success);
        assert!(gateway.called("refresh_package_index"));
        assert!(gateway.called("install_package git"));
        assert!(gateway.called("install_package python3"));
    }

    #[test]
    fn one_failure_does_not_stop_the_loop() {
        let config = config_with(&["git", "nope", "python3"]);
        let gateway = MockGateway::new().with_failing_package("nope");
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = install_packages(&mut ctx);
        assert!(outcome.is_failure());
        assert!(outcome.detail().unwrap().contains("nope"));
        assert!(!outcome.detail().unwrap().contains("git"));
        // Later packages were still attempted
        assert!(gateway.called("install_package python3"));
    }

    #[test]
    fn refresh_failure_skips_installs() {
        let config = config_with(&["git"]);
        let gateway = MockGateway::new().with_refresh_ok(false);
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = install_packages(&mut ctx);
        assert!(outcome.is_failure());
        assert!(!gateway.called("install_package"));
    }

    #[test]
    fn empty_package_list_is_a_noop() {
        let config = config_with(&[]);
        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert!(install_packages(&mut ctx).is_warning());
        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn dry_run_lists_packages_without_installing() {
        let config = config_with(&["git"]);
        let gateway = MockGateway::new();
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

        assert_eq!(install_packages(&mut ctx), StepOutcome::Success);
        assert!(gateway.calls().is_empty());
        assert!(ui.has_info("git"));
    }
}
