//! Conversation engine for Chef.
//!
//! Provides:
//! - The `ModelClient` / `ChatHandle` contract for hosted completion APIs
//! - Gemini and Groq clients implementing it
//! - Persona modes and their system prompts
//! - `ChatSession`, which keeps the local dialogue history and the remote
//!   chat handle in step across sends, failures and resets

pub mod gemini;
pub mod groq;
pub mod history;
pub mod mode;
pub mod preferences;
pub mod session;
pub mod settings;
mod transport;

use std::sync::Arc;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use groq::{GroqClient, GroqConfig};
pub use history::DialogueHistory;
pub use mode::Mode;
pub use preferences::{compose_prompt, RecipePreferences};
pub use session::{ChatSession, HandleId, HandlePolicy, SessionConfig, SessionError};
pub use settings::GenerationSettings;

/// Opens remote chat contexts.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Short provider name used in logs.
    fn provider_name(&self) -> &str;

    /// Create a chat context bound to a system prompt, generation settings
    /// and seed history. Each call returns a brand-new handle.
    async fn create_session(
        &self,
        system_prompt: &str,
        settings: &GenerationSettings,
        seed_history: &[Turn],
    ) -> Result<Arc<dyn ChatHandle>, ProviderError>;
}

/// A remote chat context that already holds its prior turns.
#[async_trait]
pub trait ChatHandle: Send + Sync {
    /// Send one user message and return the model's reply text.
    async fn send(&self, text: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_constructors_set_role() {
        assert_eq!(Turn::user("hi").role, Role::User);
        assert_eq!(Turn::model("hello").role, Role::Model);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Turn::model("Dish: Aglio e Olio")).unwrap();
        assert_eq!(json, r#"{"role":"model","text":"Dish: Aglio e Olio"}"#);
    }

    #[test]
    fn provider_error_display() {
        assert_eq!(ProviderError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            ProviderError::Api("HTTP 500: boom".into()).to_string(),
            "API error: HTTP 500: boom"
        );
        assert_eq!(
            ProviderError::Auth("bad key".into()).to_string(),
            "Authentication failed: bad key"
        );
    }
}
