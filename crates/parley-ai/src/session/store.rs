//! Session struct: transcript, provider configuration and client handle.

use chrono::{DateTime, Local};
use parley_common::SessionId;
use tracing::{debug, info, warn};

use crate::usage::UsageTracker;
use crate::{ConfigError, Connector, ProviderClient};

use super::export;
use super::orchestrator::{self, Reply};
use super::types::{check_max_tokens, check_model, check_temperature, Exchange, ProviderConfig, SessionError};

/// One user's chat session.
///
/// All mutation goes through `&mut self`, so one action completes before
/// the next begins.
pub struct Session {
    id: SessionId,
    /// Completed exchanges, oldest first.
    transcript: Vec<Exchange>,
    config: ProviderConfig,
    /// Present only after a successful `configure`; bound to `config.api_key`.
    client: Option<ProviderClient>,
    connector: Box<dyn Connector>,
    usage: UsageTracker,
}

impl Session {
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            id: SessionId::new(),
            transcript: Vec::new(),
            config: ProviderConfig::default(),
            client: None,
            connector: Box::new(connector),
            usage: UsageTracker::new(),
        }
    }

    /// Replace the generation settings. Any key in `config` is ignored; keys
    /// only enter a session through `configure`.
    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = ProviderConfig {
            api_key: std::mem::take(&mut self.config.api_key),
            ..config
        };
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Establish a provider client for `api_key`.
    ///
    /// Re-submitting the key behind the current client returns that client
    /// without contacting the provider. Any other key is validated through
    /// the connector; on failure the previous client (if any) stays active.
    pub async fn configure(&mut self, api_key: &str) -> Result<ProviderClient, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        if let Some(client) = &self.client {
            if self.config.api_key == api_key {
                debug!(session = %self.id.short(), "API key unchanged, reusing client");
                return Ok(client.clone());
            }
        }

        match self.connector.connect(api_key, &self.config.model).await {
            Ok(client) => {
                self.config.api_key = api_key.to_string();
                self.client = Some(client.clone());
                info!(session = %self.id.short(), model = %self.config.model, "provider configured");
                Ok(client)
            }
            Err(e) => {
                warn!(
                    session = %self.id.short(),
                    error = %e,
                    kept_previous = self.client.is_some(),
                    "provider configuration failed"
                );
                Err(e)
            }
        }
    }

    pub fn set_model(&mut self, model: &str) -> Result<(), ConfigError> {
        let model = model.trim();
        check_model(model)?;
        self.config.model = model.to_string();
        debug!(session = %self.id.short(), model = %model, "model changed");
        Ok(())
    }

    pub fn set_temperature(&mut self, temperature: f64) -> Result<(), ConfigError> {
        check_temperature(temperature)?;
        self.config.temperature = temperature;
        Ok(())
    }

    pub fn set_max_tokens(&mut self, max_tokens: u32) -> Result<(), ConfigError> {
        check_max_tokens(max_tokens)?;
        self.config.max_tokens = max_tokens;
        Ok(())
    }

    /// Append one exchange. Content is not inspected.
    pub fn append_exchange(
        &mut self,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> &Exchange {
        self.transcript
            .push(Exchange::new(user_text, assistant_text, timestamp));
        &self.transcript[self.transcript.len() - 1]
    }

    /// Drop the whole transcript. Configuration and client are untouched.
    pub fn clear(&mut self) {
        self.transcript = Vec::new();
        debug!(session = %self.id.short(), "transcript cleared");
    }

    /// The transcript in export format; empty when there is nothing to export.
    pub fn export_text(&self) -> String {
        export::export_text(&self.transcript)
    }

    /// Send a message and record the exchange.
    ///
    /// Provider failures do not fail this call: they become the reply text.
    pub async fn send(&mut self, user_text: &str) -> Result<&Exchange, SessionError> {
        if user_text.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let client = self.client.clone().ok_or(SessionError::NotConfigured)?;
        let timestamp = Local::now();

        let reply = orchestrator::respond_reply(
            &*client,
            user_text,
            &self.transcript,
            &self.config.params(),
        )
        .await;

        match &reply {
            Reply::Answered { usage, .. } => self.usage.record(usage),
            Reply::Failed(_) => self.usage.record_failure(),
        }

        Ok(self.append_exchange(user_text, reply.into_text(), timestamp))
    }
}
