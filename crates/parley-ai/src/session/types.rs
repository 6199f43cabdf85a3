//! Session data types: exchanges, provider configuration, errors.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Local};

use crate::{ConfigError, GenerationParams};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 100..=2000;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// One completed round-trip: the user's message and the reply shown for it.
///
/// The reply may be a folded provider error; it is stored all the same.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    user_text: String,
    assistant_text: String,
    timestamp: DateTime<Local>,
}

impl Exchange {
    pub fn new(
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            user_text: user_text.into(),
            assistant_text: assistant_text.into(),
            timestamp,
        }
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn assistant_text(&self) -> &str {
        &self.assistant_text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Provider settings owned by a session.
///
/// `api_key` is the last key that produced a client; it is empty until the
/// first successful `Session::configure`.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub(super) api_key: String,
    pub(super) model: String,
    pub(super) temperature: f64,
    pub(super) max_tokens: u32,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("ProviderConfig")
            .field("api_key", &key)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

impl ProviderConfig {
    /// Build a key-less config, checking every parameter range.
    pub fn new(
        model: impl Into<String>,
        temperature: f64,
        max_tokens: u32,
    ) -> Result<Self, ConfigError> {
        let model = model.into();
        check_model(&model)?;
        check_temperature(temperature)?;
        check_max_tokens(max_tokens)?;
        Ok(Self {
            api_key: String::new(),
            model,
            temperature,
            max_tokens,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

pub(super) fn check_model(model: &str) -> Result<(), ConfigError> {
    if model.trim().is_empty() {
        return Err(ConfigError::InvalidParameter(
            "model name must not be empty".into(),
        ));
    }
    Ok(())
}

pub(super) fn check_temperature(temperature: f64) -> Result<(), ConfigError> {
    if !TEMPERATURE_RANGE.contains(&temperature) {
        return Err(ConfigError::InvalidParameter(format!(
            "temperature {temperature} is outside [{}, {}]",
            TEMPERATURE_RANGE.start(),
            TEMPERATURE_RANGE.end()
        )));
    }
    Ok(())
}

pub(super) fn check_max_tokens(max_tokens: u32) -> Result<(), ConfigError> {
    if !MAX_TOKENS_RANGE.contains(&max_tokens) {
        return Err(ConfigError::InvalidParameter(format!(
            "max tokens {max_tokens} is outside [{}, {}]",
            MAX_TOKENS_RANGE.start(),
            MAX_TOKENS_RANGE.end()
        )));
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no provider client configured; enter an API key first")]
    NotConfigured,
    #[error("message is empty")]
    EmptyMessage,
}
