//! Connector that turns an API key into a Gemini client handle.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{ConfigError, Connector, ProviderClient};

use super::client::GeminiClient;
use super::config::{GeminiConfig, GEMINI_API_BASE};

/// Builds `GeminiClient`s, optionally probing the API to validate the key.
#[derive(Debug, Clone)]
pub struct GeminiConnector {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub verify_key: bool,
}

impl Default for GeminiConnector {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
            verify_key: true,
        }
    }
}

impl GeminiConnector {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    pub fn with_verify_key(mut self, verify: bool) -> Self {
        self.verify_key = verify;
        self
    }
}

#[async_trait]
impl Connector for GeminiConnector {
    async fn connect(&self, api_key: &str, model: &str) -> Result<ProviderClient, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        let config = GeminiConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_connect_timeout(self.connect_timeout)
            .with_request_timeout(self.request_timeout);
        let client = GeminiClient::new(config)?;

        if self.verify_key {
            client.verify_key(model).await?;
            info!(model = %model, "Gemini API key verified");
        } else {
            debug!("Gemini key verification skipped");
        }

        Ok(ProviderClient::new(client))
    }
}
