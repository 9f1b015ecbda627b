//! Install manifest schema definitions.
//!
//! These structs map to the `outpost.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{OutpostError, Result};

/// Root structure of the install manifest.
///
/// Constant for the run: fixed at load time, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Service name without the `.service` suffix (e.g. `sensord`).
    pub service: String,

    /// Git URL of the daemon's repository.
    pub repo_url: String,

    /// Directory the repository is cloned into.
    pub install_dir: PathBuf,

    /// Unit file path inside the checkout. Defaults to `<service>.service`
    /// at the checkout root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_file: Option<String>,

    /// Directory the unit symlink is installed into.
    #[serde(default = "default_unit_dir")]
    pub unit_dir: PathBuf,

    /// System account the daemon runs as. Must already exist.
    pub account: String,

    /// Group the account is added to (e.g. `dialout` for serial access).
    pub group: String,

    /// OS packages installed before anything else.
    #[serde(default)]
    pub packages: Vec<String>,

    /// Python requirements manifest inside the checkout.
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// `host:port` probed to confirm outbound connectivity.
    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,
}

fn default_unit_dir() -> PathBuf {
    PathBuf::from("/etc/systemd/system")
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_probe_addr() -> String {
    "github.com:443".to_string()
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            service: "sensord".to_string(),
            repo_url: "https://github.com/acme/sensord.git".to_string(),
            install_dir: PathBuf::from("/opt/sensord"),
            unit_file: None,
            unit_dir: default_unit_dir(),
            account: "sensord".to_string(),
            group: "dialout".to_string(),
            packages: vec![
                "git".to_string(),
                "python3".to_string(),
                "python3-pip".to_string(),
            ],
            requirements: default_requirements(),
            probe_addr: default_probe_addr(),
        }
    }
}

impl InstallConfig {
    /// Full unit name as systemd knows it (`sensord.service`).
    pub fn unit_name(&self) -> String {
        format!("{}.service", self.service)
    }

    /// Path of the unit file inside the checkout.
    pub fn unit_source(&self) -> PathBuf {
        match &self.unit_file {
            Some(rel) => self.install_dir.join(rel),
            None => self.install_dir.join(self.unit_name()),
        }
    }

    /// Path the unit symlink is installed at.
    pub fn unit_target(&self) -> PathBuf {
        self.unit_dir.join(self.unit_name())
    }

    /// Path of the requirements manifest inside the checkout.
    pub fn requirements_path(&self) -> PathBuf {
        self.install_dir.join(&self.requirements)
    }

    /// Check manifest values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.service.trim().is_empty() {
            return Err(validation("'service' must not be empty"));
        }
        if self.service.contains('/') || self.service.contains(char::is_whitespace) {
            return Err(validation("'service' must be a bare unit name"));
        }
        if self.repo_url.trim().is_empty() {
            return Err(validation("'repo_url' must not be empty"));
        }
        if self.install_dir.as_os_str().is_empty() {
            return Err(validation("'install_dir' must not be empty"));
        }
        if self.account.trim().is_empty() {
            return Err(validation("'account' must not be empty"));
        }
        if self.group.trim().is_empty() {
            return Err(validation("'group' must not be empty"));
        }
        if !self.probe_addr.contains(':') {
            return Err(validation("'probe_addr' must be host:port"));
        }
        Ok(())
    }
}

fn validation(message: &str) -> OutpostError {
    OutpostError::ConfigValidationError {
        message: message.to_string(),
    }
}
