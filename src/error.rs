//! Error types for Outpost operations.
//!
//! This module defines [`OutpostError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Step-level failures are not errors: a step that cannot reach its goal
//! state resolves to [`StepOutcome::Failed`](crate::steps::StepOutcome) and
//! the run continues. `OutpostError` is reserved for conditions that stop a
//! command before or outside the step sequence (bad configuration, broken
//! prompt, unusable process table).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outpost operations.
#[derive(Debug, Error)]
pub enum OutpostError {
    /// Install manifest not found at any expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the install manifest.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid manifest structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// An external command could not be spawned at all.
    #[error("Failed to launch '{command}': {message}")]
    CommandLaunchFailed { command: String, message: String },

    /// A prompt was required but could not be answered.
    #[error("Cannot prompt for '{key}' in non-interactive mode")]
    PromptUnavailable { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Outpost operations.
pub type Result<T> = std::result::Result<T, OutpostError>;
