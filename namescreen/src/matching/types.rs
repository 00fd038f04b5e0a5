//! Match decision types.

use super::classifier::ConfidenceTier;
use crate::extraction::Candidate;
use crate::variants::NameVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the final boolean decision was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMethod {
    /// Algorithmic decision on a high-confidence score
    FuzzyHighConfidence,
    /// The disambiguation delegate decided a medium-confidence pair
    LlmDisambiguation,
    /// Medium confidence but no delegate available; conservative default
    DisambiguationUnavailable,
    /// Best score fell below the medium threshold
    BelowThreshold,
    /// The article yielded no candidates at all
    NoCandidates,
}

impl DecisionMethod {
    /// String tag for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionMethod::FuzzyHighConfidence => "fuzzy_high_confidence",
            DecisionMethod::LlmDisambiguation => "llm_disambiguation",
            DecisionMethod::DisambiguationUnavailable => "disambiguation_unavailable",
            DecisionMethod::BelowThreshold => "below_threshold",
            DecisionMethod::NoCandidates => "no_candidates",
        }
    }
}

/// One scored (variant, candidate) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    /// The variant side of the pair
    pub variant: NameVariant,
    /// The candidate side of the pair
    pub candidate: Candidate,
    /// Similarity score in [0,100]
    pub score: f64,
}

/// The engine's final decision for one (target name, article) request.
///
/// Always produced: degraded pipelines yield a result with reduced evidence
/// and say so in the explanation, they never fail to decide. Serializes to
/// the wire schema consumed by the CLI and report layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// The raw target name as submitted
    pub target_name: String,
    /// Whether the article is considered to refer to the target
    pub match_found: bool,
    /// Confidence tier of the winning score
    pub confidence_tier: ConfidenceTier,
    /// The winning similarity score
    pub score: f64,
    /// How the decision was reached
    pub method: DecisionMethod,
    /// The matched mention from the article, if any
    pub matched_article_name: Option<String>,
    /// The variant that matched, if any
    pub matched_variant: Option<String>,
    /// Human-readable justification; never empty
    pub explanation: String,
    /// Recommended analyst action
    pub recommendation: String,
    /// When the decision was rendered
    pub timestamp: DateTime<Utc>,
}

impl MatchResult {
    /// Render the result as the machine-readable JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
