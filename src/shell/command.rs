//! External command execution.
//!
//! Every effect Outpost performs goes through an existing system tool
//! (apt-get, git, pip3, usermod, systemctl). Commands are executed
//! directly with argument vectors — never through a user shell — since
//! the command set is fixed and operand values come from the manifest.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{OutpostError, Result};

/// Result of executing an external command.
///
/// A non-zero exit is a `success == false` result, not an `Err`: callers
/// decide what a failed tool invocation means for their step. `Err` is
/// reserved for commands that could not be spawned at all.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command exited zero.
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// The last non-empty stderr line, for one-line failure reporting.
    pub fn error_trailer(&self) -> Option<&str> {
        self.stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

/// Render a command line for display and logs.
pub fn render(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Execute a command, capturing stdout and stderr.
pub fn run(program: &str, args: &[&str]) -> Result<CommandResult> {
    let start = Instant::now();

    tracing::debug!("running: {}", render(program, args));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| OutpostError::CommandLaunchFailed {
            command: render(program, args),
            message: e.to_string(),
        })?;

    let duration = start.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command and return only whether it exited zero.
pub fn run_check(program: &str, args: &[&str]) -> bool {
    run(program, args).map(|r| r.success).unwrap_or(false)
}
