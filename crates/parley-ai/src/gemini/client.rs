//! Gemini API client struct, request building, and response parsing.

use crate::{AiResponse, ConfigError, GenerationParams, Message, ProviderError, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub(crate) fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), model)
    }

    pub(crate) fn generate_url(&self, model: &str) -> String {
        format!("{}:generateContent", self.model_url(model))
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": "user",
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": params.max_tokens,
                "temperature": params.temperature,
            }
        })
    }

    /// Parse a `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, ProviderError> {
        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        let first = match json["candidates"].as_array().and_then(|c| c.first()) {
            Some(candidate) => candidate,
            None => {
                if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                    return Err(ProviderError::Blocked(reason.to_string()));
                }
                return Err(ProviderError::Parse("no candidates in response".to_string()));
            }
        };

        let content: String = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect())
            .unwrap_or_default();

        if content.is_empty() {
            if let Some(reason @ ("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT")) =
                first["finishReason"].as_str()
            {
                return Err(ProviderError::Blocked(reason.to_string()));
            }
        }

        Ok(AiResponse { content, usage })
    }
}

/// Pull `error.message` out of a Gemini error body, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
