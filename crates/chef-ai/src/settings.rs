//! Sampling and length parameters for completion calls.

use chef_common::ConfigError;
use serde::{Deserialize, Serialize};

use crate::ProviderError;

/// Generation settings. Fixed per deployment and never mutated by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 2000,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

impl GenerationSettings {
    /// Check the values every provider can accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !self.temperature.is_finite() || self.temperature < 0.0 {
            errors.push(format!("temperature = {} must be >= 0", self.temperature));
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            errors.push(format!("top_p = {} must be within [0, 1]", self.top_p));
        }
        if self.top_k < 1 {
            errors.push("top_k must be >= 1".to_string());
        }
        if self.max_output_tokens < 1 {
            errors.push("max_output_tokens must be >= 1".to_string());
        }
        if self.response_mime_type.trim().is_empty() {
            errors.push("response_mime_type must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors.join("; ")))
        }
    }
}

/// Reject a session request a provider could not serve.
pub(crate) fn check_session_request(
    system_prompt: &str,
    settings: &GenerationSettings,
) -> Result<(), ProviderError> {
    if system_prompt.trim().is_empty() {
        return Err(ProviderError::InvalidRequest(
            "system prompt must not be empty".into(),
        ));
    }
    settings
        .validate()
        .map_err(|e| ProviderError::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GenerationSettings::default().validate().is_ok());
    }

    #[test]
    fn negative_temperature_rejected() {
        let settings = GenerationSettings {
            temperature: -0.1,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err().to_string();
        assert!(err.contains("temperature"));
    }

    #[test]
    fn all_violations_reported_together() {
        let settings = GenerationSettings {
            temperature: f64::INFINITY,
            top_p: 1.5,
            top_k: 0,
            max_output_tokens: 0,
            response_mime_type: String::new(),
        };
        let err = settings.validate().unwrap_err().to_string();
        for field in [
            "temperature",
            "top_p",
            "top_k",
            "max_output_tokens",
            "response_mime_type",
        ] {
            assert!(err.contains(field), "missing {field} in: {err}");
        }
    }

    #[test]
    fn session_request_needs_prompt() {
        let err = check_session_request("   ", &GenerationSettings::default()).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRequest(_)));
    }

    #[test]
    fn session_request_surfaces_bad_settings() {
        let settings = GenerationSettings {
            top_k: 0,
            ..Default::default()
        };
        let err = check_session_request("You are a chef.", &settings).unwrap_err();
        assert!(err.to_string().contains("top_k"));
    }
}
