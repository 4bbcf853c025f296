//! Model provider selection and credential lookup.

use std::fmt;
use std::str::FromStr;

use chef_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Hosted completion API to talk to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    Groq,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
        }
    }

    /// Environment variable holding the API key when none is configured.
    pub fn default_api_key_env(self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "groq" => Ok(ProviderKind::Groq),
            other => Err(ConfigError::ValidationError(format!(
                "unknown provider '{other}' (expected gemini or groq)"
            ))),
        }
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// Model name; empty means the provider's default.
    pub model: String,
    /// Environment variable holding the API key; empty means the provider's default.
    pub api_key_env: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Gemini,
            model: String::new(),
            api_key_env: String::new(),
            request_timeout_secs: 120,
        }
    }
}

impl ProviderConfig {
    pub fn api_key_env(&self) -> &str {
        if self.api_key_env.trim().is_empty() {
            self.kind.default_api_key_env()
        } else {
            self.api_key_env.trim()
        }
    }

    /// Model override, if one is configured.
    pub fn model_override(&self) -> Option<&str> {
        let model = self.model.trim();
        (!model.is_empty()).then_some(model)
    }

    /// Read the API key from the environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        let var = self.api_key_env();
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ConfigError::MissingCredential(format!(
                "{var} is not set (needed by the {} provider)",
                self.kind
            ))),
        }
    }
}
