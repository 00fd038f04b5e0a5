//! Configuration validation.

use super::{ConfigError, Result, models::ScreenConfig};

/// Validate a full configuration tree.
pub fn validate(config: &ScreenConfig) -> Result<()> {
    config
        .thresholds
        .validate()
        .map_err(ConfigError::ValidationError)?;

    if config.variants.cache_size == 0 {
        return Err(ConfigError::ValidationError(
            "variants.cache_size must be greater than 0".to_string(),
        ));
    }

    if config.extraction.max_pattern_tokens < 2 {
        return Err(ConfigError::ValidationError(
            "extraction.max_pattern_tokens must be at least 2".to_string(),
        ));
    }

    if config.services.generative.timeout.is_zero() {
        return Err(ConfigError::ValidationError(
            "services.generative.timeout must be non-zero".to_string(),
        ));
    }

    if config.services.ner.timeout.is_zero() {
        return Err(ConfigError::ValidationError(
            "services.ner.timeout must be non-zero".to_string(),
        ));
    }

    if config.services.generative.api_key_env.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "services.generative.api_key_env must not be empty".to_string(),
        ));
    }

    Ok(())
}
