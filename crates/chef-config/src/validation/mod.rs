//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod generation;
mod helpers;
mod misc;


use crate::schema::ChefConfig;
use chef_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChefConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    generation::validate_generation(&mut errors, config);
    misc::validate_provider(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
