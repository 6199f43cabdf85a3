//! Conversation session management.
//!
//! A `Session` owns the transcript, the provider configuration and the
//! provider client handle. The orchestrator turns a new user message plus
//! recent history into a single prompt and folds provider failures into
//! displayable reply text.

mod export;
mod orchestrator;
mod store;
mod types;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use export::{export_file_name, export_text};
pub use orchestrator::{build_prompt, context_window, respond, respond_reply, Reply, CONTEXT_WINDOW};
pub use store::Session;
pub use types::{Exchange, ProviderConfig, SessionError, MAX_TOKENS_RANGE, TEMPERATURE_RANGE};
