//! Parley configuration.
//!
//! TOML-based settings for the provider connection, transcript export and
//! logging. Every section uses serde defaults, so a partial file (or no
//! file at all) yields a working configuration.
//!
//! ```rust,no_run
//! let config = parley_config::load_config(None).expect("failed to load config");
//! println!("{}", config.provider.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ExportConfig, LoggingConfig, ParleyConfig, ProviderSettings};

use parley_common::SettingsError;
use std::path::Path;

/// Load config from `path` when given, else from the platform default path.
///
/// The default file is created from the commented template if missing. An
/// explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<ParleyConfig, SettingsError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to pretty-printed JSON, for `--log-level debug` dumps.
pub fn config_to_json(config: &ParleyConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
