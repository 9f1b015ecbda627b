//! Capability trait over the host's system tools.
//!
//! Every process the installer shells out to — apt-get, git, pip3, id,
//! usermod, systemctl — is reached through [`SystemGateway`], so the
//! step logic can be exercised against [`MockGateway`] without touching
//! a real machine. Filesystem effects (checkout inspection, unit
//! symlinking, backup renames) deliberately stay outside the gateway:
//! they operate on manifest-configured paths and are tested against
//! real temp directories.

pub mod host;
pub mod mock;

pub use host::HostGateway;
pub use mock::MockGateway;

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::shell::CommandResult;

/// The host operations the installation steps depend on.
///
/// Query methods (`user_exists`, `unit_is_active`, ...) collapse to a
/// boolean: a query that cannot run reads as "not satisfied" and the
/// acting method reports the real failure. Mutating methods return the
/// full [`CommandResult`] so callers can surface the tool's stderr.
pub trait SystemGateway {
    /// Whether the process has root privileges.
    fn is_elevated(&self) -> bool;

    /// Whether an outbound TCP connection to `addr` succeeds within `timeout`.
    fn probe_connectivity(&self, addr: &str, timeout: Duration) -> bool;

    /// Refresh the OS package index.
    fn refresh_package_index(&self) -> Result<CommandResult>;

    /// Install a single OS package.
    fn install_package(&self, package: &str) -> Result<CommandResult>;

    /// Clone a git repository into `dest`.
    fn clone_repository(&self, url: &str, dest: &Path) -> Result<CommandResult>;

    /// Install a Python requirements manifest.
    fn install_requirements(&self, manifest: &Path) -> Result<CommandResult>;

    /// Whether the system account exists.
    fn user_exists(&self, account: &str) -> bool;

    /// Groups the account is a member of.
    fn user_groups(&self, account: &str) -> Result<Vec<String>>;

    /// Append the account to a supplementary group.
    fn add_user_to_group(&self, account: &str, group: &str) -> Result<CommandResult>;

    /// Reload the service manager's unit cache.
    fn daemon_reload(&self) -> Result<CommandResult>;

    /// Whether the unit is enabled on boot.
    fn unit_is_enabled(&self, unit: &str) -> bool;

    /// Enable the unit on boot.
    fn enable_unit(&self, unit: &str) -> Result<CommandResult>;

    /// Whether the unit is currently active.
    fn unit_is_active(&self, unit: &str) -> bool;

    /// Start the unit.
    fn start_unit(&self, unit: &str) -> Result<CommandResult>;

    /// Restart the unit.
    fn restart_unit(&self, unit: &str) -> Result<CommandResult>;

    /// Human-readable unit status, exactly as the service manager reports it.
    fn unit_status(&self, unit: &str) -> Result<CommandResult>;
}
