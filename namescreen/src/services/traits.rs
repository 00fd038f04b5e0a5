//! Traits for the external capabilities the engine consumes.

use super::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Parsed components of a personal name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    /// First (given) name component
    pub first: String,
    /// Middle name component(s), space-joined
    pub middle: String,
    /// Last (family) name component
    pub last: String,
    /// Generational or honorific suffix (Jr, III, ...)
    pub suffix: String,
    /// True when parsing fell back to treating the whole input as a single
    /// last-name token
    pub degraded: bool,
}

/// Trait for splitting a raw name string into components.
///
/// Implementations never fail: unparseable input degrades to a whole-string
/// last name with the `degraded` flag set.
pub trait NameParser: Send + Sync + std::fmt::Debug {
    /// Parse the given raw name.
    fn parse(&self, raw: &str) -> ParsedName;

    /// Get the name of this parser for identification purposes.
    fn name(&self) -> &str;
}

/// A person-entity span reported by the recognizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NerSpan {
    /// The surface text of the span
    pub text: String,
    /// Byte offset of the span start in the source text
    pub start: usize,
    /// Byte offset one past the span end
    pub end: usize,
}

/// Trait for named-entity recognition restricted to person entities.
#[async_trait]
pub trait NerService: Send + Sync + std::fmt::Debug {
    /// Extract person-entity spans from the given text.
    async fn person_spans(&self, text: &str) -> Result<Vec<NerSpan>, ServiceError>;

    /// Get the name of this recognizer for identification purposes.
    fn name(&self) -> &str;
}

/// Context handed to the disambiguation delegate for a medium-confidence
/// pair.
#[derive(Debug, Clone, Serialize)]
pub struct DisambiguationContext {
    /// The raw target name being screened
    pub target_name: String,
    /// The winning variant surface form
    pub variant: String,
    /// The winning candidate surface form
    pub candidate: String,
    /// Article excerpt around the candidate mention
    pub excerpt: String,
    /// The heuristic similarity score for the pair
    pub heuristic_score: f64,
}

/// Verdict returned by the disambiguation delegate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisambiguationVerdict {
    /// Whether the delegate believes the article refers to the target
    pub is_match: bool,
    /// Free-text rationale for the verdict
    pub rationale: String,
}

/// Trait for the external generative reasoning service.
///
/// One service backs three call sites with different fallback policies:
/// variant augmentation and name extraction fail open (deterministic results
/// stand), disambiguation fails conservative (no confirmed match, manual
/// review).
#[async_trait]
pub trait GenerativeService: Send + Sync + std::fmt::Debug {
    /// Request culturally-informed variants of a personal name.
    async fn generate_variants(&self, name: &str) -> Result<Vec<String>, ServiceError>;

    /// Request person names mentioned in the given article text.
    async fn extract_names(&self, text: &str) -> Result<Vec<String>, ServiceError>;

    /// Ask whether a medium-confidence pair refers to the target individual.
    async fn disambiguate(
        &self,
        context: &DisambiguationContext,
    ) -> Result<DisambiguationVerdict, ServiceError>;

    /// Get the name of this service for identification purposes.
    fn name(&self) -> &str;
}
