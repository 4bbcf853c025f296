//! Chef configuration system.
//!
//! TOML-based configuration for the model provider, generation settings,
//! session behaviour and logging. Every section uses serde defaults, so a
//! partial file (or no file at all) works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chef_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("provider: {}", config.provider.kind);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChefConfig, GenerationConfig, HandlePolicyKind, LogLevel, LoggingConfig, ProviderConfig,
    ProviderKind, SessionSchemaConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use chef_common::ConfigError;

/// Load and strictly validate the config.
///
/// With `path` set, that file must exist. Without it, `config.toml` is loaded
/// from the OS config directory and a commented default is created if none
/// exists.
pub fn load_config(path: Option<&Path>) -> Result<ChefConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}
