//! Conversation defaults: persona mode and remote handle policy.

use std::str::FromStr;

use chef_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Whether the remote chat handle survives across sends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum HandlePolicyKind {
    #[default]
    Persistent,
    FreshPerCall,
}

impl FromStr for HandlePolicyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "persistent" => Ok(HandlePolicyKind::Persistent),
            "fresh_per_call" | "fresh" => Ok(HandlePolicyKind::FreshPerCall),
            other => Err(ConfigError::ValidationError(format!(
                "unknown handle policy '{other}' (expected persistent or fresh_per_call)"
            ))),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSchemaConfig {
    /// Persona: general, fitness or vegan. Anything else means general.
    pub mode: String,
    pub handle_policy: HandlePolicyKind,
}

impl Default for SessionSchemaConfig {
    fn default() -> Self {
        Self {
            mode: "general".to_string(),
            handle_policy: HandlePolicyKind::Persistent,
        }
    }
}
