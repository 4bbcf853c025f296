//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for the chef crates at this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "chef=debug,chef_ai=debug,chef_config=debug",
            LogLevel::Info => "chef=info,chef_ai=info,chef_config=info",
            LogLevel::Warning => "chef=warn,chef_ai=warn,chef_config=warn",
            LogLevel::Error => "chef=error,chef_ai=error,chef_config=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
