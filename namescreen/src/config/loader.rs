//! Configuration loader.
//!
//! This module provides functionality to load configuration from multiple
//! sources: built-in defaults, then an optional TOML file, then
//! `NAMESCREEN_*` environment variables.

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Configuration loader that handles loading from multiple sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Create a new configuration loader with default values.
    pub fn new() -> Self {
        let figment = Figment::new().merge(Serialized::defaults(ScreenConfig::default()));
        Self { figment }
    }

    /// Load configuration from a TOML file.
    pub fn load_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        self.figment = self.figment.merge(Toml::file(path));
        Ok(self)
    }

    /// Attempt to load from default configuration file locations.
    pub fn load_default_files(mut self) -> Self {
        for file in DEFAULT_CONFIG_FILES {
            let path = PathBuf::from(file);
            if path.exists() {
                self.figment = self.figment.merge(Toml::file(path));
                break;
            }
        }
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Nested keys use double underscores, e.g.
    /// `NAMESCREEN_THRESHOLDS__HIGH=90`.
    pub fn load_env(mut self) -> Self {
        self.figment = self.figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        self
    }

    /// Extract and validate the final configuration.
    pub fn build(self) -> Result<ScreenConfig> {
        let config: ScreenConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::Other(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from default files and the environment.
pub fn load() -> Result<ScreenConfig> {
    ConfigLoader::new().load_default_files().load_env().build()
}
