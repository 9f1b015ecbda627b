//! Python dependency installation.

use super::{StepContext, StepOutcome};

/// Install the requirements manifest from the checkout, if it has one.
/// A checkout without a manifest is a warning no-op, not a failure —
/// not every daemon ships Python dependencies.
pub fn install_requirements(ctx: &mut StepContext) -> StepOutcome {
    let manifest = ctx.config.requirements_path();

    if ctx.options.dry_run {
        ctx.ui
            .info(&format!("would install {}", manifest.display()));
        return StepOutcome::Success;
    }

    if !manifest.exists() {
        ctx.ui.warning(&format!(
            "no {} in checkout, skipping Python dependencies",
            ctx.config.requirements
        ));
        return StepOutcome::Warning("no requirements manifest".to_string());
    }

    let mut spinner = ctx.ui.start_spinner("installing Python requirements");
    match ctx.gateway.install_requirements(&manifest) {
        Ok(result) if result.success => {
            spinner.finish_success("Python requirements installed");
            StepOutcome::Success
        }
        Ok(result) => {
            spinner.finish_error("pip install failed");
            StepOutcome::Failed(format!(
                "pip install failed: {}",
                result.error_trailer().unwrap_or("see pip log")
            ))
        }
        Err(e) => {
            spinner.finish_error("pip install failed");
            StepOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstallConfig;
    use crate::gateway::MockGateway;
    use crate::steps::InstallOptions;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> InstallConfig {
        InstallConfig {
            install_dir: temp.path().join("checkout"),
            ..Default::default()
        }
    }

    #[test]
    fn manifest_present_installs() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        fs::create_dir_all(&config.install_dir).unwrap();
        fs::write(config.requirements_path(), "flask\n").unwrap();

        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        assert_eq!(install_requirements(&mut ctx), StepOutcome::Success);
        assert!(gateway.called("install_requirements"));
    }

    #[test]
    fn missing_manifest_is_a_noop() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        fs::create_dir_all(&config.install_dir).unwrap();

        let gateway = MockGateway::new();
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = install_requirements(&mut ctx);
        assert!(outcome.is_warning());
        assert!(!gateway.called("install_requirements"));
        assert!(ui.has_warning("requirements.txt"));
    }

    #[test]
    fn pip_failure_is_a_step_failure() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        fs::create_dir_all(&config.install_dir).unwrap();
        fs::write(config.requirements_path(), "flask\n").unwrap();

        let gateway = MockGateway::new().with_requirements_ok(false);
        let mut ui = MockUI::new();
        let options = InstallOptions::default();
        let mut ctx = StepContext {
            config: &config,
            gateway: &gateway,
            ui: &mut ui,
            options: &options,
        };

        let outcome = install_requirements(&mut ctx);
        assert!(outcome.is_failure());
        assert!(outcome.detail().unwrap().contains("pip install failed"));
    }

    #[test]
    fn dry_run_does_not_install() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
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

        assert_eq!(install_requirements(&mut ctx), StepOutcome::Success);
        assert!(gateway.calls().is_empty());
    }
}
