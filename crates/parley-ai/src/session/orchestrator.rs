//! Response orchestration: context windowing, prompt assembly, fail-soft replies.

use tracing::{debug, warn};

use crate::{AiClient, GenerationParams, Message, ProviderError, TokenUsage};

use super::types::Exchange;

/// Number of most recent exchanges carried into each prompt.
pub const CONTEXT_WINDOW: usize = 5;

const ERROR_PREFIX: &str = "Error generating response: ";

/// Outcome of one provider call, before it is flattened into display text.
#[derive(Debug)]
pub enum Reply {
    Answered { text: String, usage: TokenUsage },
    Failed(ProviderError),
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    /// The text shown to the user and stored in the transcript.
    pub fn into_text(self) -> String {
        match self {
            Reply::Answered { text, .. } => text,
            Reply::Failed(e) => format!("{ERROR_PREFIX}{e}"),
        }
    }
}

/// The trailing slice of at most `CONTEXT_WINDOW` exchanges, oldest first.
pub fn context_window(transcript: &[Exchange]) -> &[Exchange] {
    &transcript[transcript.len().saturating_sub(CONTEXT_WINDOW)..]
}

/// Assemble the prompt for `user_text` given the session history.
///
/// With no history the prompt is `user_text` verbatim.
pub fn build_prompt(user_text: &str, transcript: &[Exchange]) -> String {
    let window = context_window(transcript);
    if window.is_empty() {
        return user_text.to_string();
    }

    let context = window
        .iter()
        .map(|e| format!("User: {}\nAssistant: {}", e.user_text(), e.assistant_text()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Previous conversation:\n{context}\n\nCurrent question: {user_text}")
}

/// Send one prompt and keep the outcome tagged.
pub async fn respond_reply(
    client: &dyn AiClient,
    user_text: &str,
    transcript: &[Exchange],
    params: &GenerationParams,
) -> Reply {
    let prompt = build_prompt(user_text, transcript);
    debug!(
        window = context_window(transcript).len(),
        prompt_len = prompt.len(),
        model = %params.model,
        "sending prompt"
    );

    match client.send_message(&[Message::user(prompt)], params).await {
        Ok(response) => Reply::Answered {
            text: response.content,
            usage: response.usage,
        },
        Err(e) => {
            warn!(error = %e, model = %params.model, "provider call failed");
            Reply::Failed(e)
        }
    }
}

/// Produce the assistant's reply text. Never fails: provider errors come
/// back as `"Error generating response: <cause>"`.
pub async fn respond(
    client: &dyn AiClient,
    user_text: &str,
    transcript: &[Exchange],
    params: &GenerationParams,
) -> String {
    respond_reply(client, user_text, transcript, params)
        .await
        .into_text()
}
