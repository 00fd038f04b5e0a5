//! Configuration model definitions.
//!
//! This module contains the configuration structures for all screening
//! components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure for the screening engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScreenConfig {
    /// Confidence tier thresholds
    pub thresholds: TierThresholds,

    /// Name variant generation configuration
    pub variants: VariantConfig,

    /// Candidate extraction configuration
    pub extraction: ExtractionConfig,

    /// External service configuration
    pub services: ServicesConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl ScreenConfig {
    /// Validate the whole configuration tree.
    pub fn validate(&self) -> super::Result<()> {
        super::validation::validate(self)
    }
}

/// Score boundaries for the HIGH/MEDIUM/LOW confidence tiers.
///
/// The boundaries must form a strict partition of the score domain [0,100]:
/// HIGH when `score >= high`, MEDIUM when `medium <= score < high`, LOW
/// otherwise. Validation rejects any pair that would overlap or leave a gap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// Scores at or above this are HIGH confidence
    pub high: f64,

    /// Scores at or above this (but below `high`) are MEDIUM confidence
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 85.0,
            medium: 70.0,
        }
    }
}

impl TierThresholds {
    /// Validate the partition, returning an error message if invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.high.is_finite() || !self.medium.is_finite() {
            return Err("tier thresholds must be finite".to_string());
        }
        if self.medium <= 0.0 {
            return Err("medium threshold must be greater than 0".to_string());
        }
        if self.high > 100.0 {
            return Err("high threshold must not exceed 100".to_string());
        }
        if self.medium >= self.high {
            return Err(format!(
                "thresholds must satisfy medium < high (got medium={}, high={})",
                self.medium, self.high
            ));
        }
        Ok(())
    }
}

/// Configuration for name variant generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    /// Whether to request culturally-informed variants from the generative
    /// service (requires a configured credential; degrades silently without)
    pub augmentation: bool,

    /// Capacity of the process-wide variant cache
    pub cache_size: usize,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            augmentation: true,
            cache_size: 256,
        }
    }
}

/// Configuration for candidate extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum length (in characters) for a candidate span to be kept
    pub min_candidate_chars: usize,

    /// Maximum number of tokens the pattern scanner will join into one
    /// candidate span
    pub max_pattern_tokens: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_candidate_chars: 2,
            max_pattern_tokens: 4,
        }
    }
}

/// Configuration for all external services.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServicesConfig {
    /// Generative service (variant augmentation, fallback extraction,
    /// disambiguation)
    pub generative: GenerativeConfig,

    /// Named-entity recognizer service
    pub ner: NerConfig,
}

/// Configuration for the external generative service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerativeConfig {
    /// Environment variable holding the API credential. When the variable is
    /// unset or empty the generative service is disabled and the engine
    /// degrades rather than failing.
    pub api_key_env: String,

    /// Base URL of the chat-completions style API
    pub base_url: String,

    /// Model identifier to request
    pub model: String,

    /// Per-call timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key_env: "NAMESCREEN_API_KEY".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration for the named-entity recognizer service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// Endpoint of the recognizer HTTP service. None disables the structured
    /// extraction stage (the cascade continues in degraded mode).
    pub endpoint: Option<String>,

    /// Per-call timeout
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for NerConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Log verbosity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Log output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Machine-readable JSON lines (for audit pipelines)
    Json,
    /// Compact single-line format
    #[default]
    Compact,
    /// Multi-line human-readable format
    Pretty,
}

/// Configuration for logging output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level to emit
    pub level: LogLevel,

    /// Output format
    pub format: LogFormat,

    /// Whether to log to stdout
    pub stdout: bool,

    /// Optional log file path (non-blocking writer)
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            stdout: true,
            file: None,
        }
    }
}
