//! Groq chat-completions client (OpenAI-compatible wire format).

mod api;
mod client;
mod config;

pub use api::GroqChat;
pub use client::GroqClient;
pub use config::GroqConfig;
