//! Validation for generation settings.

use crate::schema::ChefConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_generation(errors: &mut Vec<String>, config: &ChefConfig) {
    let generation = &config.generation;
    validate_range_f64(
        errors,
        "generation.temperature",
        generation.temperature,
        0.0,
        2.0,
    );
    validate_range_f64(errors, "generation.top_p", generation.top_p, 0.0, 1.0);
    validate_range(errors, "generation.top_k", generation.top_k, 1, 1000);
    validate_range(
        errors,
        "generation.max_output_tokens",
        generation.max_output_tokens,
        1,
        65536,
    );
    validate_non_empty(
        errors,
        "generation.response_mime_type",
        &generation.response_mime_type,
    );
}
