//! Google Gemini API client.
//!
//! Implements `AiClient` for Gemini models via the Generative Language
//! API, and `Connector` for turning an API key into a client handle.

mod api;
mod client;
mod config;
mod connector;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use connector::GeminiConnector;
