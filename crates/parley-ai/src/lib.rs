//! Conversation engine for Parley.
//!
//! Provides:
//! - The provider boundary (`AiClient`, `Connector`) and a Gemini implementation
//! - `Session`: transcript, provider configuration and the client handle
//! - The response orchestrator that windows recent history into each prompt
//! - Plain-text transcript export

pub mod connector;
pub mod gemini;
pub mod session;
pub mod usage;

use async_trait::async_trait;

pub use connector::{Connector, ProviderClient};
pub use gemini::{GeminiClient, GeminiConfig, GeminiConnector};
pub use session::{
    export_file_name, respond, Exchange, ProviderConfig, Reply, Session, SessionError,
    CONTEXT_WINDOW,
};
pub use usage::UsageTracker;

/// A single request/response call to a generative-language model.
///
/// Implementations hold no conversation state: every call is a fresh
/// provider-side conversation built only from `messages`.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<AiResponse, ProviderError>;
}

/// One user turn. Every request starts a fresh provider-side conversation,
/// so history travels inside the text rather than as separate turns.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Per-request generation settings, taken from the session's `ProviderConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Failure of a single `send_message` call.
///
/// Never escapes the orchestrator: its display text becomes part of the
/// assistant reply.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited")]
    RateLimited,
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("response blocked: {0}")]
    Blocked(String),
    #[error("timeout")]
    Timeout,
}

/// Failure to establish or reconfigure a provider client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is empty")]
    EmptyKey,
    #[error("API key rejected: {0}")]
    Rejected(String),
    #[error("could not reach provider: {0}")]
    Network(String),
    #[error("failed to build client: {0}")]
    Client(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
