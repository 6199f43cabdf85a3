//! AiClient trait implementation for GeminiClient, plus key verification.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiResponse, ConfigError, GenerationParams, Message, ProviderError};

use super::client::{error_message, GeminiClient};

fn send_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(e.to_string())
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<AiResponse, ProviderError> {
        let body = self.build_request_body(messages, params);
        let url = self.generate_url(&params.model);

        debug!(model = %params.model, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "HTTP {status}: {}",
                error_message(&text)
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout
            } else {
                ProviderError::Parse(e.to_string())
            }
        })?;

        self.parse_response(json)
    }
}

impl GeminiClient {
    /// Check the key against the model metadata endpoint.
    ///
    /// Client errors (bad key, unknown model) reject the key; transport
    /// failures and server errors are reported as unreachable.
    pub async fn verify_key(&self, model: &str) -> Result<(), ConfigError> {
        let url = self.model_url(model);

        debug!(model = %model, "Gemini key verification");

        let response = self
            .http
            .get(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| ConfigError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = format!("HTTP {status}: {}", error_message(&text));
        if status.is_client_error() {
            Err(ConfigError::Rejected(message))
        } else {
            Err(ConfigError::Network(message))
        }
    }
}
