//! Groq API client struct, request building, and response parsing.

use crate::transport::build_http_client;
use crate::{GenerationSettings, ProviderError, Role, Turn};

use super::config::GroqConfig;

pub(crate) const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, ProviderError> {
        let http = build_http_client(config.request_timeout_secs)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GroqConfig {
        &self.config
    }
}

/// Build the JSON request body. `top_k` and the response MIME type have no
/// counterpart in this API and are left out.
pub(crate) fn build_request_body(
    model: &str,
    system_prompt: &str,
    settings: &GenerationSettings,
    context: &[Turn],
    text: &str,
) -> serde_json::Value {
    let mut messages = Vec::with_capacity(context.len() + 2);
    messages.push(serde_json::json!({ "role": "system", "content": system_prompt }));

    for turn in context {
        let role = match turn.role {
            Role::User => "user",
            Role::Model => "assistant",
        };
        messages.push(serde_json::json!({ "role": role, "content": turn.text }));
    }
    messages.push(serde_json::json!({ "role": "user", "content": text }));

    serde_json::json!({
        "model": model,
        "messages": messages,
        "temperature": settings.temperature,
        "top_p": settings.top_p,
        "max_tokens": settings.max_output_tokens,
    })
}

/// Pull the reply text out of a chat-completions response.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, ProviderError> {
    let choice = json["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or_else(|| ProviderError::Parse("no choices in response".to_string()))?;

    choice["message"]["content"]
        .as_str()
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ProviderError::Parse("choice has no message content".to_string()))
}
