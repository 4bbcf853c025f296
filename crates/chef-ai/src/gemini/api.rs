//! `ModelClient` and `ChatHandle` implementations for Gemini.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::settings::check_session_request;
use crate::transport::{map_send_error, read_json};
use crate::{ChatHandle, GenerationSettings, ModelClient, ProviderError, Turn};

use super::client::{build_request_body, parse_response, GeminiClient};

#[async_trait]
impl ModelClient for GeminiClient {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn create_session(
        &self,
        system_prompt: &str,
        settings: &GenerationSettings,
        seed_history: &[Turn],
    ) -> Result<Arc<dyn ChatHandle>, ProviderError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ProviderError::Auth("Gemini API key is missing".into()));
        }
        check_session_request(system_prompt, settings)?;

        debug!(
            model = %self.config.model,
            seed_turns = seed_history.len(),
            "Opening Gemini chat"
        );

        Ok(Arc::new(GeminiChat {
            http: self.http.clone(),
            url: self.api_url(),
            api_key: self.config.api_key.clone(),
            model: self.config.model.clone(),
            system_prompt: system_prompt.to_string(),
            settings: settings.clone(),
            context: Mutex::new(seed_history.to_vec()),
        }))
    }
}

/// One Gemini conversation. Holds the turns the API has seen so far.
pub struct GeminiChat {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
    system_prompt: String,
    settings: GenerationSettings,
    context: Mutex<Vec<Turn>>,
}

#[async_trait]
impl ChatHandle for GeminiChat {
    async fn send(&self, text: &str) -> Result<String, ProviderError> {
        let body = {
            let context = self.context.lock().await;
            build_request_body(&self.system_prompt, &self.settings, &context, text)
        };

        debug!(model = %self.model, chars = text.len(), "Gemini API request");

        let response = self
            .http
            .post(&self.url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let json = read_json(response).await?;
        let reply = parse_response(&json)?;

        let mut context = self.context.lock().await;
        context.push(Turn::user(text));
        context.push(Turn::model(reply.clone()));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiConfig;

    #[tokio::test]
    async fn create_session_requires_api_key() {
        let client = GeminiClient::new(GeminiConfig::new("  ")).unwrap();
        let result = client
            .create_session("You are a chef.", &GenerationSettings::default(), &[])
            .await;
        assert!(matches!(result, Err(ProviderError::Auth(_))));
    }

    #[tokio::test]
    async fn create_session_rejects_invalid_settings() {
        let client = GeminiClient::new(GeminiConfig::new("key")).unwrap();
        let settings = GenerationSettings {
            top_p: 2.0,
            ..Default::default()
        };
        let result = client.create_session("You are a chef.", &settings, &[]).await;
        assert!(matches!(result, Err(ProviderError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn create_session_accepts_seed_history() {
        let client = GeminiClient::new(GeminiConfig::new("key")).unwrap();
        assert_eq!(client.provider_name(), "gemini");
        let seed = vec![Turn::user("hi"), Turn::model("hello")];
        assert!(client
            .create_session("You are a chef.", &GenerationSettings::default(), &seed)
            .await
            .is_ok());
    }
}
