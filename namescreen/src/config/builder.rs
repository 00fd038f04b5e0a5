//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*};

/// Builder for creating ScreenConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: ScreenConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: ScreenConfig::default(),
        }
    }

    /// Create a builder pre-populated with defaults (alias for `new`, kept
    /// for call-site readability in `init_with_defaults`).
    pub fn defaults() -> Self {
        Self::new()
    }

    /// Set the HIGH confidence threshold.
    pub fn with_high_threshold(mut self, threshold: f64) -> Self {
        self.config.thresholds.high = threshold;
        self
    }

    /// Set the MEDIUM confidence threshold.
    pub fn with_medium_threshold(mut self, threshold: f64) -> Self {
        self.config.thresholds.medium = threshold;
        self
    }

    /// Enable or disable generative variant augmentation.
    pub fn with_augmentation(mut self, enabled: bool) -> Self {
        self.config.variants.augmentation = enabled;
        self
    }

    /// Set the variant cache capacity.
    pub fn with_cache_size(mut self, capacity: usize) -> Self {
        self.config.variants.cache_size = capacity;
        self
    }

    /// Set the recognizer service endpoint.
    pub fn with_ner_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.services.ner.endpoint = Some(endpoint.into());
        self
    }

    /// Set the generative service base URL and model.
    pub fn with_generative_service(
        mut self,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        self.config.services.generative.base_url = base_url.into();
        self.config.services.generative.model = model.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Disable stdout logging (useful when the CLI owns the terminal).
    pub fn without_stdout_logging(mut self) -> Self {
        self.config.logging.stdout = false;
        self
    }

    /// Validate and return the final configuration.
    pub fn build(self) -> Result<ScreenConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
