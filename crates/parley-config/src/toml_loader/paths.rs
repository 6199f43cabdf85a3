//! Config path resolution and default file creation.

use parley_common::SettingsError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_NAME: &str = "parley";

/// Platform config directory for Parley (`~/.config/parley` on Linux).
pub fn default_config_dir() -> Result<PathBuf, SettingsError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| SettingsError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_NAME))
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, SettingsError> {
    Ok(default_config_dir()?.join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            SettingsError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        SettingsError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
