//! One-shot recipe request.

use std::sync::Arc;

use chef_ai::{
    compose_prompt, ChatSession, GenerationSettings, HandlePolicy, Mode, ModelClient,
    RecipePreferences, SessionConfig,
};
use chef_common::ChefError;
use tracing::debug;

/// Send a single prompt with preferences folded in and return the reply.
pub async fn run(
    client: Arc<dyn ModelClient>,
    mode: Mode,
    settings: GenerationSettings,
    prompt: &str,
    preferences: &RecipePreferences,
) -> Result<String, ChefError> {
    let full_prompt = compose_prompt(prompt, preferences);
    debug!(%mode, chars = full_prompt.len(), "One-shot request");

    let config = SessionConfig::new(mode.system_prompt(), settings)
        .with_policy(HandlePolicy::FreshPerCall);
    let session = ChatSession::new(client, config)?;

    session
        .send_message(&full_prompt)
        .await
        .map_err(ChefError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chef_ai::{ChatHandle, ProviderError, Turn};
    use std::sync::Mutex;

    /// Echoes the system prompt's first word and the text it was sent.
    struct EchoClient {
        opened: Mutex<usize>,
    }

    struct EchoHandle {
        system_prompt: String,
    }

    #[async_trait]
    impl ModelClient for EchoClient {
        fn provider_name(&self) -> &str {
            "echo"
        }

        async fn create_session(
            &self,
            system_prompt: &str,
            _settings: &GenerationSettings,
            _seed_history: &[Turn],
        ) -> Result<Arc<dyn ChatHandle>, ProviderError> {
            *self.opened.lock().unwrap() += 1;
            Ok(Arc::new(EchoHandle {
                system_prompt: system_prompt.to_string(),
            }))
        }
    }

    #[async_trait]
    impl ChatHandle for EchoHandle {
        async fn send(&self, text: &str) -> Result<String, ProviderError> {
            if text.contains("fail") {
                return Err(ProviderError::Timeout);
            }
            let persona = if self.system_prompt.contains("vegan chef") {
                "vegan"
            } else {
                "other"
            };
            Ok(format!("[{persona}] {text}"))
        }
    }

    #[tokio::test]
    async fn ask_folds_preferences_into_prompt() {
        let client = Arc::new(EchoClient {
            opened: Mutex::new(0),
        });
        let prefs = RecipePreferences {
            allergies: "sesame".into(),
            ..Default::default()
        };

        let reply = run(
            client.clone(),
            Mode::Vegan,
            GenerationSettings::default(),
            "noodles",
            &prefs,
        )
        .await
        .unwrap();

        assert_eq!(
            reply,
            "[vegan] noodles\n\nAvoid the following allergens: sesame"
        );
        assert_eq!(*client.opened.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn ask_surfaces_generation_failure() {
        let client = Arc::new(EchoClient {
            opened: Mutex::new(0),
        });
        let err = run(
            client,
            Mode::General,
            GenerationSettings::default(),
            "please fail",
            &RecipePreferences::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ChefError::Ai(_)));
        assert!(err.to_string().contains("Timeout"));
    }
}
