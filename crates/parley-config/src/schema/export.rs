//! Transcript export settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for `chat_history_*.txt` files. Empty means the working directory.
    pub directory: String,
}

impl ExportConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        if self.directory.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(self.directory.trim())
        }
    }
}
