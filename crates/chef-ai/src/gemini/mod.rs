//! Google Gemini API client.
//!
//! Implements `ModelClient` for Gemini models via the Generative Language
//! API. The API is stateless, so each chat handle replays its own context.

mod api;
mod client;
mod config;

pub use api::GeminiChat;
pub use client::GeminiClient;
pub use config::GeminiConfig;
