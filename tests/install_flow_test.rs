//! End-to-end installation scenarios against the mock gateway.
//!
//! These exercise the whole step sequence through `runner::run_install`
//! the way the `install` command drives it, with filesystem effects
//! landing in temp directories.

use std::fs;

use outpost::config::InstallConfig;
use outpost::gateway::MockGateway;
use outpost::runner::{exit_code, run_install, summarize};
use outpost::steps::{ConflictPolicy, InstallOptions, StepOutcome};
use outpost::ui::MockUI;
use tempfile::TempDir;

fn config_in(temp: &TempDir) -> InstallConfig {
    let config = InstallConfig {
        install_dir: temp.path().join("checkout"),
        unit_dir: temp.path().join("system"),
        ..Default::default()
    };
    fs::create_dir_all(&config.unit_dir).unwrap();
    config
}

fn healthy_gateway() -> MockGateway {
    MockGateway::new()
        .with_account("sensord", &["sensord"])
        .with_clone_files(&["sensord.service", "requirements.txt"])
}

fn outcome_of<'a>(
    reports: &'a [outpost::steps::StepReport],
    name: &str,
) -> &'a StepOutcome {
    &reports
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no report for step {}", name))
        .outcome
}

#[test]
fn fresh_machine_all_steps_succeed() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let gateway = healthy_gateway();
    let mut ui = MockUI::new();
    let options = InstallOptions::default();

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert_eq!(reports.len(), 10);
    for report in &reports {
        assert_eq!(
            report.outcome,
            StepOutcome::Success,
            "step {} should succeed",
            report.name
        );
    }

    let summary = summarize(&reports, std::time::Duration::from_secs(1));
    assert!(summary.success);
    assert!(summary.failed_steps.is_empty());
    assert_eq!(exit_code(&reports), 0);

    // Persisted artifacts: the checkout and the unit symlink
    assert!(config.install_dir.join("sensord.service").exists());
    assert!(fs::symlink_metadata(config.unit_target())
        .unwrap()
        .file_type()
        .is_symlink());
}

#[test]
fn existing_checkout_reused_and_rest_proceeds() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);

    // Pre-existing checkout with a valid unit file
    fs::create_dir_all(&config.install_dir).unwrap();
    fs::write(config.unit_source(), "[Unit]\n").unwrap();
    fs::write(config.install_dir.join("marker.txt"), "keep").unwrap();

    let gateway = MockGateway::new().with_account("sensord", &["sensord"]);
    let mut ui = MockUI::new();
    ui.set_interactive(true);
    ui.set_confirm_response("replace_checkout", false);
    let options = InstallOptions::default();

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert!(outcome_of(&reports, "repository").is_warning());
    // The declined re-clone left the directory untouched
    assert!(config.install_dir.join("marker.txt").exists());
    assert!(!gateway.called("clone_repository"));

    // Later steps proceeded normally off the existing checkout
    assert_eq!(*outcome_of(&reports, "register"), StepOutcome::Success);
    assert_eq!(*outcome_of(&reports, "start"), StepOutcome::Success);
    assert_eq!(exit_code(&reports), 0);
}

#[test]
fn missing_account_fails_only_the_group_step() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let gateway =
        MockGateway::new().with_clone_files(&["sensord.service", "requirements.txt"]);
    let mut ui = MockUI::new();
    let options = InstallOptions::default();

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert_eq!(reports.len(), 10);
    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| r.outcome.is_failure())
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(failed, ["group"]);
    assert_eq!(exit_code(&reports), 1);

    let summary = summarize(&reports, std::time::Duration::from_secs(1));
    assert!(!summary.success);
    assert_eq!(summary.failed_steps, ["group"]);
}

#[test]
fn missing_unit_file_fails_register_without_target_mutation() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    // Clone produces requirements but no unit file
    let gateway = MockGateway::new()
        .with_account("sensord", &["sensord"])
        .with_clone_files(&["requirements.txt"]);
    let mut ui = MockUI::new();
    let options = InstallOptions::default();

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert!(outcome_of(&reports, "register").is_failure());
    assert!(!config.unit_target().exists());
    assert!(!gateway.called("daemon_reload"));
    // The run still went on to enable/start/verify
    assert!(gateway.called("enable_unit"));
    assert!(gateway.called("start_unit"));
}

#[test]
fn regular_file_at_unit_path_is_backed_up() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let gateway = healthy_gateway();
    let mut ui = MockUI::new();
    let options = InstallOptions::default();

    let original = "[Unit]\nDescription=Hand-rolled unit\n";
    fs::write(config.unit_target(), original).unwrap();

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert_eq!(*outcome_of(&reports, "register"), StepOutcome::Success);

    let backup = fs::read_dir(&config.unit_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| e.file_name().to_string_lossy().contains(".bak-"))
        .expect("backup file exists");
    assert_eq!(fs::read_to_string(backup.path()).unwrap(), original);
}

#[test]
fn already_converged_host_reports_noops_not_failures() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);

    // Checkout present, account already in the group, unit enabled and
    // active: a re-run over a converged host.
    fs::create_dir_all(&config.install_dir).unwrap();
    fs::write(config.unit_source(), "[Unit]\n").unwrap();

    let gateway = MockGateway::new()
        .with_account("sensord", &["sensord", "dialout"])
        .with_unit_enabled("sensord.service")
        .with_unit_active("sensord.service");
    let mut ui = MockUI::new();
    let options = InstallOptions {
        on_existing: ConflictPolicy::Reuse,
        ..Default::default()
    };

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert!(outcome_of(&reports, "repository").is_warning());
    assert!(outcome_of(&reports, "group").is_warning());
    assert!(outcome_of(&reports, "enable").is_warning());
    // Already-running service is restarted, not plain-started
    assert!(gateway.called("restart_unit"));
    assert!(!gateway.called("start_unit"));
    assert_eq!(exit_code(&reports), 0);
}

#[test]
fn replace_policy_reclones_without_prompting() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);

    fs::create_dir_all(&config.install_dir).unwrap();
    fs::write(config.install_dir.join("stale.txt"), "old").unwrap();

    let gateway = healthy_gateway();
    let mut ui = MockUI::new();
    ui.set_interactive(true);
    let options = InstallOptions {
        on_existing: ConflictPolicy::Replace,
        ..Default::default()
    };

    let reports = run_install(&config, &gateway, &mut ui, &options);

    assert!(ui.confirms_shown().is_empty());
    assert!(!config.install_dir.join("stale.txt").exists());
    assert_eq!(*outcome_of(&reports, "repository"), StepOutcome::Success);
    assert_eq!(exit_code(&reports), 0);
}

#[test]
fn successful_run_summary_matches_reports() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let gateway = healthy_gateway();
    let mut ui = MockUI::new();
    let options = InstallOptions::default();

    let reports = run_install(&config, &gateway, &mut ui, &options);
    let summary = summarize(&reports, std::time::Duration::from_secs(2));

    assert_eq!(summary.step_results.len(), 10);
    assert_eq!(summary.warnings, 0);
    assert!(summary.success);
    assert_eq!(summary.step_results[0].name, "privileges");
}
