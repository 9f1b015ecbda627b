//! Real gateway implementation shelling out to the host's tools.

use std::fs::OpenOptions;
use std::io::Write;
use std::net::{TcpStream, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::shell::command::{render, run, run_check};
use crate::shell::{is_elevated, CommandResult};

use super::SystemGateway;

/// Gateway backed by the real host: apt-get, git, pip3, usermod, systemctl.
#[derive(Debug, Default)]
pub struct HostGateway;

impl HostGateway {
    pub fn new() -> Self {
        Self
    }

    fn apt_log() -> PathBuf {
        std::env::temp_dir().join("outpost-apt.log")
    }

    fn pip_log() -> PathBuf {
        std::env::temp_dir().join("outpost-pip.log")
    }
}

/// Append a command transcript to a transient log. Best-effort: the log
/// exists for post-mortem reading and never fails the step.
fn append_log(path: &Path, command: &str, result: &CommandResult) {
    let entry = format!(
        "$ {}\nexit: {:?}\n{}{}\n",
        command, result.exit_code, result.stdout, result.stderr
    );
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(entry.as_bytes());
    }
}

impl SystemGateway for HostGateway {
    fn is_elevated(&self) -> bool {
        is_elevated()
    }

    fn probe_connectivity(&self, addr: &str, timeout: Duration) -> bool {
        let Ok(addrs) = addr.to_socket_addrs() else {
            return false;
        };
        for addr in addrs {
            if TcpStream::connect_timeout(&addr, timeout).is_ok() {
                return true;
            }
        }
        false
    }

    fn refresh_package_index(&self) -> Result<CommandResult> {
        let args = ["update", "-q"];
        let result = run("apt-get", &args)?;
        append_log(&Self::apt_log(), &render("apt-get", &args), &result);
        Ok(result)
    }

    fn install_package(&self, package: &str) -> Result<CommandResult> {
        let args = ["install", "-y", package];
        let result = run("apt-get", &args)?;
        append_log(&Self::apt_log(), &render("apt-get", &args), &result);
        Ok(result)
    }

    fn clone_repository(&self, url: &str, dest: &Path) -> Result<CommandResult> {
        let dest = dest.to_string_lossy();
        run("git", &["clone", url, &dest[..]])
    }

    fn install_requirements(&self, manifest: &Path) -> Result<CommandResult> {
        let manifest = manifest.to_string_lossy();
        // --break-system-packages overrides PEP 668 so the daemon's
        // requirements land in the interpreter its unit file runs with.
        let args = ["install", "-r", &manifest[..], "--break-system-packages"];
        let result = run("pip3", &args)?;
        append_log(&Self::pip_log(), &render("pip3", &args), &result);
        Ok(result)
    }

    fn user_exists(&self, account: &str) -> bool {
        run_check("id", &["-u", account])
    }

    fn user_groups(&self, account: &str) -> Result<Vec<String>> {
        let result = run("id", &["-nG", account])?;
        if !result.success {
            return Ok(Vec::new());
        }
        Ok(result
            .stdout
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }

    fn add_user_to_group(&self, account: &str, group: &str) -> Result<CommandResult> {
        run("usermod", &["-aG", group, account])
    }

    fn daemon_reload(&self) -> Result<CommandResult> {
        run("systemctl", &["daemon-reload"])
    }

    fn unit_is_enabled(&self, unit: &str) -> bool {
        run_check("systemctl", &["is-enabled", "--quiet", unit])
    }

    fn enable_unit(&self, unit: &str) -> Result<CommandResult> {
        run("systemctl", &["enable", unit])
    }

    fn unit_is_active(&self, unit: &str) -> bool {
        run_check("systemctl", &["is-active", "--quiet", unit])
    }

    fn start_unit(&self, unit: &str) -> Result<CommandResult> {
        run("systemctl", &["start", unit])
    }

    fn restart_unit(&self, unit: &str) -> Result<CommandResult> {
        run("systemctl", &["restart", unit])
    }

    fn unit_status(&self, unit: &str) -> Result<CommandResult> {
        // `status` exits non-zero for inactive units; the caller displays
        // stdout either way and checks activity separately.
        run("systemctl", &["status", unit, "--no-pager", "--full"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_connectivity_rejects_unresolvable_host() {
        let gateway = HostGateway::new();
        assert!(!gateway.probe_connectivity(
            "no-such-host.invalid:443",
            Duration::from_millis(200)
        ));
    }

    #[test]
    fn probe_connectivity_rejects_malformed_addr() {
        let gateway = HostGateway::new();
        assert!(!gateway.probe_connectivity("not-an-addr", Duration::from_millis(200)));
    }

    #[test]
    fn append_log_writes_transcript() {
        let temp = tempfile::TempDir::new().unwrap();
        let log = temp.path().join("tool.log");
        let result = CommandResult::success("out\n".into(), String::new(), Duration::ZERO);

        append_log(&log, "echo out", &result);
        append_log(&log, "echo out", &result);

        let content = std::fs::read_to_string(&log).unwrap();
        assert_eq!(content.matches("$ echo out").count(), 2);
        assert!(content.contains("out"));
    }

    #[test]
    fn user_exists_is_false_for_missing_account() {
        let gateway = HostGateway::new();
        assert!(!gateway.user_exists("outpost-no-such-account"));
    }
}
