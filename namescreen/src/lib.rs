//! # Namescreen
//!
//! Name-matching engine for adverse-media screening in regulated compliance
//! workflows. Given a target individual's name and the text of a news
//! article, the engine decides whether the article refers to that individual
//! and always produces an auditable explanation for the decision.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namescreen::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let screener = namescreen::init_with_defaults()?;
//!
//!     let article = std::fs::read_to_string("article.txt")
//!         .map_err(|e| ScreenError::InvalidInput(e.to_string()))?;
//!     let result = screener.screen("William Johnson", &article).await?;
//!
//!     println!("match: {} ({})", result.match_found, result.explanation);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Variants**: deterministic surface forms of the target name (nicknames,
//!   initials, reordering, diacritic folding), optionally augmented by a
//!   generative service, cached per process.
//! - **Extraction**: a cascade of candidate extractors over the article text
//!   (person-entity recognizer, capitalized-pattern scan, generative
//!   fallback), merged and deduplicated.
//! - **Matching**: fuzzy similarity over the variant x candidate
//!   cross-product, tiered confidence classification, and a conservative
//!   disambiguation fallback for medium-confidence results.
//!
//! External services (recognizer, generative augmentation, disambiguation)
//! are optional. When one is missing or failing the pipeline degrades and
//! says so in the explanation; it never refuses to render a decision. The
//! only fatal error is invalid input.

pub mod config;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod screener;
pub mod services;
pub mod text;
pub mod variants;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::screener::{Screener, ScreeningReport};

    pub use crate::{init, init_with_defaults};

    pub use crate::config::{
        ConfigBuilder, ExtractionConfig, LogFormat, LogLevel, LoggingConfig, ScreenConfig,
        ServicesConfig, TierThresholds, VariantConfig,
    };

    pub use crate::matching::{
        ConfidenceTier, DecisionMethod, MatchResult, RecommendedAction, ScoredPair,
    };

    pub use crate::extraction::{Candidate, ExtractionMethod};
    pub use crate::variants::{NameVariant, TargetName, VariantKind, VariantSet};

    pub use crate::{Result, ScreenError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for screening operations
///
/// The engine's external contract is "always returns a result, or fails only
/// on invalid input": service-level failures are absorbed into degraded
/// `MatchResult`s inside the pipeline and never surface through this enum
/// from `Screener::screen`.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// Invalid input (empty target name, unreadable article). Fatal.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// External service error
    #[error("Service error: {0}")]
    Service(#[from] crate::services::ServiceError),
}

impl From<crate::config::ConfigError> for ScreenError {
    fn from(err: crate::config::ConfigError) -> Self {
        ScreenError::Configuration(err.to_string())
    }
}

/// Result type for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Initialize the screening engine with default configuration.
///
/// Reads the generative-service credential from the environment; when it is
/// absent, augmentation and disambiguation are disabled and the engine runs
/// on its deterministic stages only.
pub fn init_with_defaults() -> Result<screener::Screener> {
    let config = config::ConfigBuilder::defaults().build()?;
    init(config)
}

/// Initialize the screening engine with the provided configuration.
///
/// Sets up logging and constructs the external-service clients. Returns a
/// [`screener::Screener`] that can serve any number of concurrent requests.
pub fn init(config: config::ScreenConfig) -> Result<screener::Screener> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    screener::Screener::new(config)
}
