//! Validation for the provider section.

use crate::schema::ChefConfig;

use super::helpers::validate_range;

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &ChefConfig) {
    validate_range(
        errors,
        "provider.request_timeout_secs",
        config.provider.request_timeout_secs,
        1,
        600,
    );
}
