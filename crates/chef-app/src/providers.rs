//! Builds the model client and session config from the loaded config.

use std::sync::Arc;

use chef_ai::{
    GeminiClient, GeminiConfig, GenerationSettings, GroqClient, GroqConfig, HandlePolicy,
    ModelClient, SessionConfig,
};
use chef_common::ChefError;
use chef_config::{GenerationConfig, HandlePolicyKind, ProviderConfig, ProviderKind};
use tracing::info;

pub fn generation_settings(config: &GenerationConfig) -> GenerationSettings {
    GenerationSettings {
        temperature: config.temperature,
        top_p: config.top_p,
        top_k: config.top_k,
        max_output_tokens: config.max_output_tokens,
        response_mime_type: config.response_mime_type.clone(),
    }
}

pub fn handle_policy(kind: HandlePolicyKind) -> HandlePolicy {
    match kind {
        HandlePolicyKind::Persistent => HandlePolicy::Persistent,
        HandlePolicyKind::FreshPerCall => HandlePolicy::FreshPerCall,
    }
}

pub fn session_config(mode: &str, generation: &GenerationConfig, policy: HandlePolicyKind) -> SessionConfig {
    SessionConfig::for_mode(mode, generation_settings(generation)).with_policy(handle_policy(policy))
}

/// Create the client for the configured provider. Fails if the API key is
/// not in the environment.
pub fn build_client(config: &ProviderConfig) -> Result<Arc<dyn ModelClient>, ChefError> {
    let api_key = config.resolve_api_key()?;
    let timeout = u64::from(config.request_timeout_secs);

    let client: Arc<dyn ModelClient> = match config.kind {
        ProviderKind::Gemini => {
            let mut gemini = GeminiConfig::new(api_key).with_request_timeout_secs(timeout);
            if let Some(model) = config.model_override() {
                gemini = gemini.with_model(model);
            }
            let client = GeminiClient::new(gemini).map_err(|e| ChefError::Ai(e.to_string()))?;
            info!(model = %client.config().model, "Using Gemini");
            Arc::new(client)
        }
        ProviderKind::Groq => {
            let mut groq = GroqConfig::new(api_key).with_request_timeout_secs(timeout);
            if let Some(model) = config.model_override() {
                groq = groq.with_model(model);
            }
            let client = GroqClient::new(groq).map_err(|e| ChefError::Ai(e.to_string()))?;
            info!(model = %client.config().model, "Using Groq");
            Arc::new(client)
        }
    };
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_settings_copy_every_field() {
        let config = GenerationConfig {
            temperature: 0.2,
            top_p: 0.5,
            top_k: 10,
            max_output_tokens: 512,
            response_mime_type: "text/markdown".into(),
        };
        let settings = generation_settings(&config);
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.top_p, 0.5);
        assert_eq!(settings.top_k, 10);
        assert_eq!(settings.max_output_tokens, 512);
        assert_eq!(settings.response_mime_type, "text/markdown");
    }

    #[test]
    fn session_config_uses_mode_prompt_and_policy() {
        let config = session_config(
            "fitness",
            &GenerationConfig::default(),
            HandlePolicyKind::FreshPerCall,
        );
        assert_eq!(config.system_prompt, chef_ai::Mode::Fitness.system_prompt());
        assert_eq!(config.policy, HandlePolicy::FreshPerCall);
        assert_eq!(config.settings, GenerationSettings::default());
    }

    #[test]
    fn build_client_needs_credential() {
        let config = ProviderConfig {
            api_key_env: "CHEF_APP_TEST_KEY_NEVER_SET".into(),
            ..ProviderConfig::default()
        };
        let err = build_client(&config).err().unwrap();
        assert!(matches!(err, ChefError::Config(_)));
    }
}
