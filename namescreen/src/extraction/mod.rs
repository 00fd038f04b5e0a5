//! Candidate extraction from article text.
//!
//! A cascade of extraction stages (recognizer, pattern scan, generative
//! fallback) whose results are merged, normalized, and deduplicated. The
//! cascade is tolerant of missing dependencies: an unavailable stage is
//! skipped and logged, and the pipeline continues with reduced evidence.

mod generative;
mod ner;
mod pattern;
mod traits;
mod types;

pub use generative::GenerativeCandidateExtractor;
pub use ner::NerCandidateExtractor;
pub use pattern::PatternCandidateExtractor;
pub use traits::*;
pub use types::*;

use crate::config::ExtractionConfig;
use crate::text::{dedup_key, squash_whitespace};
use std::collections::HashSet;
use tracing::{debug, warn};

/// The full extraction cascade over one article.
#[derive(Debug)]
pub struct ArticleExtractor {
    structured: NerCandidateExtractor,
    pattern: PatternCandidateExtractor,
    fallback: GenerativeCandidateExtractor,
    config: ExtractionConfig,
}

impl ArticleExtractor {
    /// Assemble the cascade from its stages.
    pub fn new(
        structured: NerCandidateExtractor,
        pattern: PatternCandidateExtractor,
        fallback: GenerativeCandidateExtractor,
        config: ExtractionConfig,
    ) -> Self {
        Self {
            structured,
            pattern,
            fallback,
            config,
        }
    }

    /// Extract candidate person-name mentions from the article.
    ///
    /// Never fails: malformed or empty text yields an empty set.
    pub async fn extract(&self, article_text: &str) -> Vec<Candidate> {
        if article_text.trim().is_empty() {
            return Vec::new();
        }

        let structured_outcome = self.structured.extract(article_text).await;
        if let ExtractionOutcome::Unavailable(reason) = &structured_outcome {
            warn!(%reason, "structured extraction skipped");
        }

        let pattern_outcome = self.pattern.extract(article_text).await;

        let mut merged: Vec<Candidate> = Vec::new();
        merged.extend_from_slice(structured_outcome.candidates());
        merged.extend_from_slice(pattern_outcome.candidates());

        // The generative fallback only runs when the deterministic stages
        // found nothing, or the recognizer could not run at all.
        if merged.is_empty() || structured_outcome.is_unavailable() {
            let fallback_outcome = self.fallback.extract(article_text).await;
            if let ExtractionOutcome::Unavailable(reason) = &fallback_outcome {
                debug!(%reason, "generative fallback unavailable");
            }
            merged.extend_from_slice(fallback_outcome.candidates());
        }

        let candidates = self.finalize(merged);
        debug!(count = candidates.len(), "candidate extraction complete");
        candidates
    }

    /// Normalize, filter, and dedupe the merged candidates while preserving
    /// the first-seen display casing and enumeration order.
    fn finalize(&self, merged: Vec<Candidate>) -> Vec<Candidate> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut result = Vec::new();

        for mut candidate in merged {
            candidate.text = squash_whitespace(&candidate.text);

            if candidate.text.chars().count() < self.config.min_candidate_chars {
                continue;
            }
            if !candidate.text.chars().any(|c| c.is_alphabetic()) {
                continue;
            }

            if seen.insert(dedup_key(&candidate.text)) {
                result.push(candidate);
            }
        }

        result
    }
}
