//! Manifest discovery and loading.
//!
//! Search order: an explicit `--config` path, then `outpost.yml` in the
//! current directory, then the system-wide `/etc/outpost/outpost.yml`.
//! The first hit wins; there is no merging.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::InstallConfig;
use crate::error::{OutpostError, Result};

/// Manifest file name looked up in the current directory.
pub const CONFIG_FILE: &str = "outpost.yml";

/// System-wide manifest location.
const SYSTEM_CONFIG: &str = "/etc/outpost/outpost.yml";

/// Find the manifest path, honoring an explicit override.
///
/// An explicit path is returned as-is even if it does not exist, so the
/// load error names the path the operator asked for.
pub fn discover(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let local = std::env::current_dir()
        .unwrap_or_default()
        .join(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    let system = PathBuf::from(SYSTEM_CONFIG);
    if system.exists() {
        return system;
    }

    local
}

/// Load and validate the manifest.
pub fn load(explicit: Option<&Path>) -> Result<InstallConfig> {
    let path = discover(explicit);
    load_from(&path)
}

/// Load and validate the manifest at a specific path.
pub fn load_from(path: &Path) -> Result<InstallConfig> {
    if !path.exists() {
        return Err(OutpostError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("loading manifest from {}", path.display());

    let content = fs::read_to_string(path)?;
    let config: InstallConfig =
        serde_yaml::from_str(&content).map_err(|e| OutpostError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}
