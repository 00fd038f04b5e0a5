//! Types for candidate extraction.

use serde::{Deserialize, Serialize};

/// Which cascade stage produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    /// The external person-entity recognizer
    StructuredParser,
    /// The capitalized-sequence pattern scan
    Pattern,
    /// The generative fallback
    FallbackGenerative,
}

impl ExtractionMethod {
    /// String tag for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::StructuredParser => "structured-parser",
            ExtractionMethod::Pattern => "pattern",
            ExtractionMethod::FallbackGenerative => "fallback-generative",
        }
    }
}

/// A person-name mention extracted from article text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The mention text, whitespace-normalized with original casing
    pub text: String,
    /// Which stage found it
    pub method: ExtractionMethod,
    /// Byte offset of the mention in the source text (0 when unknown)
    pub offset: usize,
}

impl Candidate {
    /// Create a new candidate.
    pub fn new(text: impl Into<String>, method: ExtractionMethod, offset: usize) -> Self {
        Self {
            text: text.into(),
            method,
            offset,
        }
    }

    /// Number of whitespace-separated tokens in the mention.
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Typed outcome of one extraction stage.
///
/// The cascade composes these instead of using errors for control flow: a
/// stage that cannot run reports Unavailable and the pipeline carries on
/// with reduced evidence.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    /// The stage ran and found candidates
    Found(Vec<Candidate>),
    /// The stage ran and found nothing
    Empty,
    /// The stage could not run (missing or failing dependency)
    Unavailable(String),
}

impl ExtractionOutcome {
    /// Candidates found, or an empty slice.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            ExtractionOutcome::Found(candidates) => candidates,
            _ => &[],
        }
    }

    /// Whether the stage could not run.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ExtractionOutcome::Unavailable(_))
    }
}
