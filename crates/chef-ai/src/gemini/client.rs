//! Gemini API client struct, request building, and response parsing.

use crate::transport::build_http_client;
use crate::{GenerationSettings, ProviderError, Role, Turn};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http = build_http_client(config.request_timeout_secs)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }
}

/// Build the JSON request body for one `generateContent` call.
pub(crate) fn build_request_body(
    system_prompt: &str,
    settings: &GenerationSettings,
    context: &[Turn],
    text: &str,
) -> serde_json::Value {
    let mut contents: Vec<serde_json::Value> = context
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::User => "user",
                Role::Model => "model",
            };
            serde_json::json!({
                "role": role,
                "parts": [{ "text": turn.text }]
            })
        })
        .collect();

    contents.push(serde_json::json!({
        "role": "user",
        "parts": [{ "text": text }]
    }));

    serde_json::json!({
        "systemInstruction": {
            "parts": [{ "text": system_prompt }]
        },
        "contents": contents,
        "generationConfig": {
            "temperature": settings.temperature,
            "topP": settings.top_p,
            "topK": settings.top_k,
            "maxOutputTokens": settings.max_output_tokens,
            "responseMimeType": settings.response_mime_type,
        }
    })
}

/// Pull the reply text out of a Gemini response.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, ProviderError> {
    let candidates = json["candidates"]
        .as_array()
        .ok_or_else(|| ProviderError::Parse("no candidates in response".to_string()))?;

    let first = candidates
        .first()
        .ok_or_else(|| ProviderError::Parse("empty candidates".to_string()))?;

    let parts = first["content"]["parts"]
        .as_array()
        .ok_or_else(|| ProviderError::Parse("candidate has no content parts".to_string()))?;

    let content: String = parts.iter().filter_map(|part| part["text"].as_str()).collect();

    if content.is_empty() {
        return Err(ProviderError::Parse("candidate has no text".to_string()));
    }
    Ok(content)
}
