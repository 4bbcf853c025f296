//! Sampling and length parameters sent with every completion request.

use serde::{Deserialize, Serialize};

/// Generation settings, fixed per deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Nucleus sampling cutoff (valid range: 0.0-1.0).
    pub top_p: f64,
    /// Top-k sampling (valid range: 1-1000).
    pub top_k: u32,
    /// Reply length cap in tokens (valid range: 1-65536).
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
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
