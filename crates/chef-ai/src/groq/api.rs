//! `ModelClient` and `ChatHandle` implementations for Groq.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::settings::check_session_request;
use crate::transport::{map_send_error, read_json};
use crate::{ChatHandle, GenerationSettings, ModelClient, ProviderError, Turn};

use super::client::{build_request_body, parse_response, GroqClient, GROQ_CHAT_URL};

#[async_trait]
impl ModelClient for GroqClient {
    fn provider_name(&self) -> &str {
        "groq"
    }

    async fn create_session(
        &self,
        system_prompt: &str,
        settings: &GenerationSettings,
        seed_history: &[Turn],
    ) -> Result<Arc<dyn ChatHandle>, ProviderError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ProviderError::Auth("Groq API key is missing".into()));
        }
        check_session_request(system_prompt, settings)?;

        debug!(
            model = %self.config.model,
            seed_turns = seed_history.len(),
            "Opening Groq chat"
        );

        Ok(Arc::new(GroqChat {
            http: self.http.clone(),
            api_key: self.config.api_key.clone(),
            model: self.config.model.clone(),
            system_prompt: system_prompt.to_string(),
            settings: settings.clone(),
            context: Mutex::new(seed_history.to_vec()),
        }))
    }
}

/// One Groq conversation. Holds the turns the API has seen so far.
pub struct GroqChat {
    http: reqwest::Client,
    api_key: String,
    model: String,
    system_prompt: String,
    settings: GenerationSettings,
    context: Mutex<Vec<Turn>>,
}

#[async_trait]
impl ChatHandle for GroqChat {
    async fn send(&self, text: &str) -> Result<String, ProviderError> {
        let body = {
            let context = self.context.lock().await;
            build_request_body(
                &self.model,
                &self.system_prompt,
                &self.settings,
                &context,
                text,
            )
        };

        debug!(model = %self.model, chars = text.len(), "Groq API request");

        let response = self
            .http
            .post(GROQ_CHAT_URL)
            .bearer_auth(&self.api_key)
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
