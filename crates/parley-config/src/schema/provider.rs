//! Generative-language provider settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Provider connection and generation defaults.
///
/// The API key itself never lives in the file; `api_key_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub model: String,
    /// Sampling temperature (valid range: 0.0-1.0).
    pub temperature: f64,
    /// Maximum reply length in tokens (valid range: 100-2000).
    pub max_tokens: u32,
    pub api_key_env: String,
    pub base_url: String,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 5-600).
    pub request_timeout_secs: u32,
    /// Probe the model endpoint when a key is entered.
    pub verify_key: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
            max_tokens: 500,
            api_key_env: "GEMINI_API_KEY".into(),
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            verify_key: true,
        }
    }
}
