//! Text rendering for the terminal shell.

use chrono::{DateTime, Local};
use parley_ai::{Exchange, ProviderConfig, UsageTracker};

pub const EXAMPLE_QUESTION: &str = "What is artificial intelligence?";
pub const EXAMPLE_ANSWER: &str = "Artificial Intelligence (AI) is a branch of computer science \
that focuses on creating systems capable of performing tasks that typically require human \
intelligence. This includes learning, reasoning, problem-solving, perception, and language \
understanding. AI systems can analyze data, recognize patterns, and make decisions to solve \
complex problems across various domains like healthcare, finance, transportation, and more.";

pub fn format_time(ts: DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}

pub fn user_line(text: &str, ts: DateTime<Local>) -> String {
    format!("You ({}):\n{text}", format_time(ts))
}

pub fn assistant_line(text: &str, ts: DateTime<Local>) -> String {
    format!("AI Assistant ({}):\n{text}", format_time(ts))
}

/// Both halves of an exchange; the reply carries the request's timestamp.
pub fn exchange(e: &Exchange) -> String {
    format!(
        "{}\n\n{}\n",
        user_line(e.user_text(), e.timestamp()),
        assistant_line(e.assistant_text(), e.timestamp())
    )
}

pub fn banner() -> String {
    "Parley: AI chatbot with Google Gemini\nType /help for commands.\n".to_string()
}

/// Shown while no API key is configured.
pub fn unconfigured_intro(now: DateTime<Local>) -> String {
    format!(
        "Enter your Google Gemini API key with /key <api-key> to start chatting.\n\
         You can get a free API key from: https://makersuite.google.com/app/apikey\n\n\
         Example conversation:\n\n{}\n\n{}\n",
        user_line(EXAMPLE_QUESTION, now),
        assistant_line(EXAMPLE_ANSWER, now)
    )
}

pub fn settings(config: &ProviderConfig, usage: &UsageTracker, configured: bool) -> String {
    let key = if configured { "configured" } else { "not set" };
    format!(
        "API key:      {key}\n\
         Model:        {}\n\
         Temperature:  {:.1}\n\
         Max tokens:   {}\n\
         Calls:        {} ({} failed)\n\
         Tokens used:  {} in / {} out",
        config.model(),
        config.temperature(),
        config.max_tokens(),
        usage.call_count(),
        usage.failed_calls(),
        usage.total().input_tokens,
        usage.total().output_tokens,
    )
}
