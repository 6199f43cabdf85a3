use std::path::PathBuf;

/// Failures while reading or validating the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("settings validation error: {0}")]
    ValidationError(String),
}
