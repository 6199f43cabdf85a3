//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod export;
mod logging;
mod provider;

pub use export::*;
pub use logging::*;
pub use provider::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Parley.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParleyConfig {
    pub provider: ProviderSettings,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}
