//! Mock gateway for testing.
//!
//! `MockGateway` implements [`SystemGateway`] against an in-memory model
//! of the host and records every call for later assertion. Defaults
//! describe a healthy machine where everything succeeds; individual
//! behaviors are toggled per test.
//!
//! # Example
//!
//! ```
//! use outpost::gateway::{MockGateway, SystemGateway};
//!
//! let gateway = MockGateway::new().with_account("sensord", &["sensord"]);
//! assert!(gateway.user_exists("sensord"));
//! assert!(!gateway.user_exists("nobody-else"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::shell::CommandResult;

use super::SystemGateway;

fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new(), Duration::ZERO)
}

fn fail(stderr: &str) -> CommandResult {
    CommandResult::failure(Some(1), String::new(), stderr.to_string(), Duration::ZERO)
}

/// In-memory [`SystemGateway`] with call recording.
#[derive(Debug)]
pub struct MockGateway {
    elevated: bool,
    online: bool,
    refresh_ok: bool,
    failing_packages: HashSet<String>,
    clone_ok: bool,
    /// Relative paths created under the clone destination, emulating the
    /// repository's contents.
    clone_files: Vec<String>,
    requirements_ok: bool,
    accounts: HashMap<String, Vec<String>>,
    usermod_ok: bool,
    reload_ok: bool,
    enable_ok: bool,
    start_ok: bool,
    restart_ok: bool,
    status_text: String,
    enabled_units: RefCell<HashSet<String>>,
    active_units: RefCell<HashSet<String>>,
    calls: RefCell<Vec<String>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// A healthy host: root, online, every tool succeeds, no accounts.
    pub fn new() -> Self {
        Self {
            elevated: true,
            online: true,
            refresh_ok: true,
            failing_packages: HashSet::new(),
            clone_ok: true,
            clone_files: Vec::new(),
            requirements_ok: true,
            accounts: HashMap::new(),
            usermod_ok: true,
            reload_ok: true,
            enable_ok: true,
            start_ok: true,
            restart_ok: true,
            status_text: "● mock.service - Mock Daemon\n   Active: active (running)".to_string(),
            enabled_units: RefCell::new(HashSet::new()),
            active_units: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn with_online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    pub fn with_refresh_ok(mut self, ok: bool) -> Self {
        self.refresh_ok = ok;
        self
    }

    /// Make installation of the named package fail.
    pub fn with_failing_package(mut self, package: &str) -> Self {
        self.failing_packages.insert(package.to_string());
        self
    }

    pub fn with_clone_ok(mut self, ok: bool) -> Self {
        self.clone_ok = ok;
        self
    }

    /// Files (relative paths) a successful clone creates under the
    /// destination, emulating the repository's contents.
    pub fn with_clone_files(mut self, files: &[&str]) -> Self {
        self.clone_files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_requirements_ok(mut self, ok: bool) -> Self {
        self.requirements_ok = ok;
        self
    }

    /// Register a system account and its current groups.
    pub fn with_account(mut self, account: &str, groups: &[&str]) -> Self {
        self.accounts.insert(
            account.to_string(),
            groups.iter().map(|g| g.to_string()).collect(),
        );
        self
    }

    pub fn with_usermod_ok(mut self, ok: bool) -> Self {
        self.usermod_ok = ok;
        self
    }

    pub fn with_reload_ok(mut self, ok: bool) -> Self {
        self.reload_ok = ok;
        self
    }

    pub fn with_enable_ok(mut self, ok: bool) -> Self {
        self.enable_ok = ok;
        self
    }

    pub fn with_start_ok(mut self, ok: bool) -> Self {
        self.start_ok = ok;
        self
    }

    pub fn with_unit_enabled(self, unit: &str) -> Self {
        self.enabled_units.borrow_mut().insert(unit.to_string());
        self
    }

    pub fn with_unit_active(self, unit: &str) -> Self {
        self.active_units.borrow_mut().insert(unit.to_string());
        self
    }

    pub fn with_status_text(mut self, text: &str) -> Self {
        self.status_text = text.to_string();
        self
    }

    /// Every gateway call made, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any recorded call starts with `prefix`.
    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl SystemGateway for MockGateway {
    fn is_elevated(&self) -> bool {
        self.record("is_elevated".to_string());
        self.elevated
    }

    fn probe_connectivity(&self, addr: &str, _timeout: Duration) -> bool {
        self.record(format!("probe_connectivity {}", addr));
        self.online
    }

    fn refresh_package_index(&self) -> Result<CommandResult> {
        self.record("refresh_package_index".to_string());
        Ok(if self.refresh_ok {
            ok("Reading package lists...")
        } else {
            fail("E: Could not get lock /var/lib/apt/lists/lock")
        })
    }

    fn install_package(&self, package: &str) -> Result<CommandResult> {
        self.record(format!("install_package {}", package));
        Ok(if self.failing_packages.contains(package) {
            fail(&format!("E: Unable to locate package {}", package))
        } else {
            ok("Setting up...")
        })
    }

    fn clone_repository(&self, url: &str, dest: &Path) -> Result<CommandResult> {
        self.record(format!("clone_repository {} {}", url, dest.display()));
        if !self.clone_ok {
            return Ok(fail(&format!("fatal: unable to access '{}'", url)));
        }
        std::fs::create_dir_all(dest)?;
        for rel in &self.clone_files {
            let path = dest.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, format!("# {}\n", rel))?;
        }
        Ok(ok(""))
    }

    fn install_requirements(&self, manifest: &Path) -> Result<CommandResult> {
        self.record(format!("install_requirements {}", manifest.display()));
        Ok(if self.requirements_ok {
            ok("Successfully installed")
        } else {
            fail("ERROR: No matching distribution found")
        })
    }

    fn user_exists(&self, account: &str) -> bool {
        self.record(format!("user_exists {}", account));
        self.accounts.contains_key(account)
    }

    fn user_groups(&self, account: &str) -> Result<Vec<String>> {
        self.record(format!("user_groups {}", account));
        Ok(self.accounts.get(account).cloned().unwrap_or_default())
    }

    fn add_user_to_group(&self, account: &str, group: &str) -> Result<CommandResult> {
        self.record(format!("add_user_to_group {} {}", account, group));
        Ok(if self.usermod_ok {
            ok("")
        } else {
            fail(&format!("usermod: group '{}' does not exist", group))
        })
    }

    fn daemon_reload(&self) -> Result<CommandResult> {
        self.record("daemon_reload".to_string());
        Ok(if self.reload_ok {
            ok("")
        } else {
            fail("Failed to reload daemon")
        })
    }

    fn unit_is_enabled(&self, unit: &str) -> bool {
        self.record(format!("unit_is_enabled {}", unit));
        self.enabled_units.borrow().contains(unit)
    }

    fn enable_unit(&self, unit: &str) -> Result<CommandResult> {
        self.record(format!("enable_unit {}", unit));
        if self.enable_ok {
            self.enabled_units.borrow_mut().insert(unit.to_string());
            Ok(ok(""))
        } else {
            Ok(fail(&format!("Failed to enable unit: {}", unit)))
        }
    }

    fn unit_is_active(&self, unit: &str) -> bool {
        self.record(format!("unit_is_active {}", unit));
        self.active_units.borrow().contains(unit)
    }

    fn start_unit(&self, unit: &str) -> Result<CommandResult> {
        self.record(format!("start_unit {}", unit));
        if self.start_ok {
            self.active_units.borrow_mut().insert(unit.to_string());
            Ok(ok(""))
        } else {
            Ok(fail(&format!("Job for {} failed", unit)))
        }
    }

    fn restart_unit(&self, unit: &str) -> Result<CommandResult> {
        self.record(format!("restart_unit {}", unit));
        if self.restart_ok {
            self.active_units.borrow_mut().insert(unit.to_string());
            Ok(ok(""))
        } else {
            Ok(fail(&format!("Job for {} failed", unit)))
        }
    }

    fn unit_status(&self, unit: &str) -> Result<CommandResult> {
        self.record(format!("unit_status {}", unit));
        if self.active_units.borrow().contains(unit) {
            Ok(ok(&self.status_text))
        } else {
            // status exits non-zero for inactive units but still prints
            Ok(CommandResult::failure(
                Some(3),
                self.status_text.clone(),
                String::new(),
                Duration::ZERO,
            ))
        }
    }
}
