//! Scripted provider doubles shared by the session tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Local, TimeZone};

use crate::{
    AiClient, AiResponse, ConfigError, Connector, GenerationParams, Message, ProviderClient,
    ProviderError, TokenUsage,
};

use super::types::Exchange;

type Script = Arc<Mutex<VecDeque<Result<String, ProviderError>>>>;

/// Client that replays queued results and records what it was sent.
/// With an empty queue it answers `"ok"`.
#[derive(Clone, Default)]
pub(crate) struct ScriptedClient {
    script: Script,
    sent: Arc<Mutex<Vec<Vec<Message>>>>,
    params: Arc<Mutex<Vec<GenerationParams>>>,
}

impl ScriptedClient {
    pub(crate) fn push_ok(&self, text: &str) {
        self.script.lock().unwrap().push_back(Ok(text.to_string()));
    }

    pub(crate) fn push_err(&self, err: ProviderError) {
        self.script.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn sent(&self) -> Vec<Vec<Message>> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn params(&self) -> Vec<GenerationParams> {
        self.params.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(
        &self,
        messages: &[Message],
        params: &GenerationParams,
    ) -> Result<AiResponse, ProviderError> {
        self.sent.lock().unwrap().push(messages.to_vec());
        self.params.lock().unwrap().push(params.clone());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".to_string()));
        next.map(|content| AiResponse {
            content,
            usage: TokenUsage {
                input_tokens: 4,
                output_tokens: 2,
            },
        })
    }
}

/// Connector that accepts keys starting with `good` and hands out clients
/// sharing one `ScriptedClient` script.
#[derive(Clone, Default)]
pub(crate) struct FakeConnector {
    pub(crate) client: ScriptedClient,
    connects: Arc<AtomicUsize>,
}

impl FakeConnector {
    pub(crate) fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    async fn connect(&self, api_key: &str, _model: &str) -> Result<ProviderClient, ConfigError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if api_key.starts_with("good") {
            Ok(ProviderClient::new(self.client.clone()))
        } else {
            Err(ConfigError::Rejected("API key not valid".into()))
        }
    }
}

pub(crate) fn params() -> GenerationParams {
    GenerationParams {
        model: "gemini-2.0-flash".into(),
        temperature: 0.7,
        max_tokens: 500,
    }
}

/// `n` exchanges `q0/a0 .. q{n-1}/a{n-1}`, one second apart.
pub(crate) fn exchanges(n: usize) -> Vec<Exchange> {
    let start = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            Exchange::new(
                format!("q{i}"),
                format!("a{i}"),
                start + Duration::seconds(i as i64),
            )
        })
        .collect()
}
