//! The match engine: cross-product scoring, tier classification, and the
//! conservative disambiguation fallback.
//!
//! The engine always reaches a decision. Service failures inside it degrade
//! the evidence behind the decision and are reported in the explanation;
//! they never escape as errors.

use super::classifier::{ConfidenceTier, RecommendedAction, classify};
use super::similarity::similarity;
use super::types::{DecisionMethod, MatchResult, ScoredPair};
use crate::config::TierThresholds;
use crate::extraction::Candidate;
use crate::services::{DisambiguationContext, GenerativeService, with_timeout};
use crate::variants::{AugmentationOutcome, TargetName, VariantSet};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Radius, in bytes, of the article excerpt handed to the disambiguation
/// delegate.
const EXCERPT_RADIUS: usize = 240;

/// Scores variant/candidate pairs and renders the final decision.
#[derive(Debug)]
pub struct MatchEngine {
    thresholds: TierThresholds,
    disambiguator: Option<Arc<dyn GenerativeService>>,
    disambiguation_timeout: Duration,
}

impl MatchEngine {
    /// Create an engine with the given thresholds and optional
    /// disambiguation delegate.
    pub fn new(
        thresholds: TierThresholds,
        disambiguator: Option<Arc<dyn GenerativeService>>,
        disambiguation_timeout: Duration,
    ) -> Self {
        Self {
            thresholds,
            disambiguator,
            disambiguation_timeout,
        }
    }

    /// Evaluate one (target, article) request into a final decision.
    pub async fn evaluate(
        &self,
        target: &TargetName,
        variants: &VariantSet,
        candidates: &[Candidate],
        article_text: &str,
    ) -> MatchResult {
        if candidates.is_empty() {
            return self.no_candidates_result(target, variants);
        }

        let best = self.select_best(variants, candidates);
        let (tier, action) = classify(best.score, &self.thresholds);
        debug!(
            score = best.score,
            tier = %tier,
            candidate = %best.candidate.text,
            variant = %best.variant.text,
            "classified best pair"
        );

        match action {
            RecommendedAction::AutoDecide => self.decide_high(target, variants, best, tier),
            RecommendedAction::Disambiguate => {
                self.decide_medium(target, variants, best, tier, article_text)
                    .await
            }
            RecommendedAction::ManualReview => self.decide_low(target, variants, best, tier),
        }
    }

    /// Score every pair and select the maximum under the deterministic
    /// tie-break order: stronger variant kind, then the candidate with more
    /// tokens, then the pair encountered first.
    fn select_best(&self, variants: &VariantSet, candidates: &[Candidate]) -> ScoredPair {
        let mut best: Option<ScoredPair> = None;

        for variant in variants.iter() {
            for candidate in candidates {
                let score = similarity(&variant.text, &candidate.text);
                let challenger = ScoredPair {
                    variant: variant.clone(),
                    candidate: candidate.clone(),
                    score,
                };

                best = Some(match best.take() {
                    None => challenger,
                    Some(incumbent) => {
                        if Self::beats(&challenger, &incumbent) {
                            challenger
                        } else {
                            incumbent
                        }
                    }
                });
            }
        }

        // Candidates were checked non-empty and variant sets are never
        // empty, so the cross-product has at least one pair.
        best.expect("non-empty cross-product")
    }

    fn beats(challenger: &ScoredPair, incumbent: &ScoredPair) -> bool {
        if challenger.score != incumbent.score {
            return challenger.score > incumbent.score;
        }
        let (c_rank, i_rank) = (challenger.variant.kind.rank(), incumbent.variant.kind.rank());
        if c_rank != i_rank {
            return c_rank < i_rank;
        }
        challenger.candidate.token_count() > incumbent.candidate.token_count()
    }

    fn decide_high(
        &self,
        target: &TargetName,
        variants: &VariantSet,
        best: ScoredPair,
        tier: ConfidenceTier,
    ) -> MatchResult {
        let match_found = best.score >= self.thresholds.high;
        let explanation = format!(
            "The name '{candidate}' in the article matched variant '{variant}' of \
             '{target}' with score {score:.1}/100 ({tier} confidence).{note}",
            candidate = best.candidate.text,
            variant = best.variant.text,
            target = target.raw,
            score = best.score,
            tier = tier,
            note = augmentation_note(variants.augmentation),
        );

        self.result(
            target,
            match_found,
            tier,
            best.score,
            DecisionMethod::FuzzyHighConfidence,
            Some(best),
            explanation,
        )
    }

    async fn decide_medium(
        &self,
        target: &TargetName,
        variants: &VariantSet,
        best: ScoredPair,
        tier: ConfidenceTier,
        article_text: &str,
    ) -> MatchResult {
        let Some(delegate) = &self.disambiguator else {
            return self.disambiguation_unavailable(target, variants, best, tier, None);
        };

        let context = DisambiguationContext {
            target_name: target.raw.clone(),
            variant: best.variant.text.clone(),
            candidate: best.candidate.text.clone(),
            excerpt: excerpt_around(article_text, best.candidate.offset, EXCERPT_RADIUS),
            heuristic_score: best.score,
        };

        match with_timeout(self.disambiguation_timeout, delegate.disambiguate(&context)).await {
            Ok(verdict) => {
                let outcome = if verdict.is_match {
                    "confirmed"
                } else {
                    "rejected"
                };
                let explanation = format!(
                    "Heuristic score {score:.1}/100 ({tier} confidence) for '{candidate}' \
                     against variant '{variant}' of '{target}'. Disambiguation {outcome} the \
                     match: {rationale}{note}",
                    score = best.score,
                    tier = tier,
                    candidate = best.candidate.text,
                    variant = best.variant.text,
                    target = target.raw,
                    outcome = outcome,
                    rationale = verdict.rationale,
                    note = augmentation_note(variants.augmentation),
                );

                self.result(
                    target,
                    verdict.is_match,
                    tier,
                    best.score,
                    DecisionMethod::LlmDisambiguation,
                    Some(best),
                    explanation,
                )
            }
            Err(e) => {
                warn!(error = %e, "disambiguation delegate failed; defaulting conservatively");
                self.disambiguation_unavailable(target, variants, best, tier, Some(e.to_string()))
            }
        }
    }

    fn disambiguation_unavailable(
        &self,
        target: &TargetName,
        variants: &VariantSet,
        best: ScoredPair,
        tier: ConfidenceTier,
        error: Option<String>,
    ) -> MatchResult {
        let cause = match error {
            Some(e) => format!(" ({e})"),
            None => String::new(),
        };
        let explanation = format!(
            "Best pair '{candidate}' against variant '{variant}' of '{target}' scored \
             {score:.1}/100 ({tier} confidence); disambiguation unavailable{cause} — \
             defaulting to manual review.{note}",
            candidate = best.candidate.text,
            variant = best.variant.text,
            target = target.raw,
            score = best.score,
            tier = tier,
            cause = cause,
            note = augmentation_note(variants.augmentation),
        );

        self.result(
            target,
            false,
            tier,
            best.score,
            DecisionMethod::DisambiguationUnavailable,
            Some(best),
            explanation,
        )
    }

    fn decide_low(
        &self,
        target: &TargetName,
        variants: &VariantSet,
        best: ScoredPair,
        tier: ConfidenceTier,
    ) -> MatchResult {
        let explanation = format!(
            "Best match score below threshold: '{candidate}' against variant '{variant}' \
             scored {score:.1}/100 ({tier} confidence). No name in the article sufficiently \
             matched '{target}'.{note}",
            candidate = best.candidate.text,
            variant = best.variant.text,
            score = best.score,
            tier = tier,
            target = target.raw,
            note = augmentation_note(variants.augmentation),
        );

        self.result(
            target,
            false,
            tier,
            best.score,
            DecisionMethod::BelowThreshold,
            Some(best),
            explanation,
        )
    }

    fn no_candidates_result(&self, target: &TargetName, variants: &VariantSet) -> MatchResult {
        let explanation = format!(
            "No candidates found in article: no person-name mentions were extracted, so \
             '{target}' cannot be matched.{note}",
            target = target.raw,
            note = augmentation_note(variants.augmentation),
        );

        self.result(
            target,
            false,
            ConfidenceTier::Low,
            0.0,
            DecisionMethod::NoCandidates,
            None,
            explanation,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn result(
        &self,
        target: &TargetName,
        match_found: bool,
        tier: ConfidenceTier,
        score: f64,
        method: DecisionMethod,
        best: Option<ScoredPair>,
        explanation: String,
    ) -> MatchResult {
        let recommendation = recommendation_for(match_found, tier);
        let (matched_article_name, matched_variant) = match best {
            Some(pair) => (Some(pair.candidate.text), Some(pair.variant.text)),
            None => (None, None),
        };

        MatchResult {
            target_name: target.raw.clone(),
            match_found,
            confidence_tier: tier,
            score,
            method,
            matched_article_name,
            matched_variant,
            explanation,
            recommendation,
            timestamp: Utc::now(),
        }
    }
}

/// The analyst-facing recommendation for a decision.
///
/// Conservative by construction: every negative determination below HIGH
/// confidence, and every positive determination, routes to a human.
fn recommendation_for(match_found: bool, tier: ConfidenceTier) -> String {
    if match_found {
        "Manual review recommended: an analyst should confirm this adverse-media hit for \
         regulatory compliance."
            .to_string()
    } else if tier == ConfidenceTier::High {
        "Article can likely be dismissed: low probability of referring to the target individual."
            .to_string()
    } else {
        "Manual review recommended: the result is uncertain.".to_string()
    }
}

/// Human-readable flag describing whether variant augmentation was
/// exercised, appended to every explanation.
fn augmentation_note(outcome: AugmentationOutcome) -> &'static str {
    match outcome {
        AugmentationOutcome::Applied => " Variant augmentation: applied.",
        AugmentationOutcome::Disabled => " Variant augmentation: disabled.",
        AugmentationOutcome::Unconfigured => {
            " Variant augmentation: not exercised (no generative credential)."
        }
        AugmentationOutcome::Failed => {
            " Variants: partial (augmentation failed; deterministic set only)."
        }
    }
}

/// Slice a whitespace-normalized excerpt around a byte offset, clamped to
/// character boundaries.
fn excerpt_around(text: &str, offset: usize, radius: usize) -> String {
    let offset = offset.min(text.len());

    let mut start = offset.saturating_sub(radius);
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = (offset + radius).min(text.len());
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }

    crate::text::squash_whitespace(&text[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_clamps_to_char_boundaries() {
        let text = "José García was seen near the café on Tuesday.";
        let excerpt = excerpt_around(text, 3, 4);
        assert!(text.contains(excerpt.trim()));
    }

    #[test]
    fn excerpt_handles_out_of_range_offsets() {
        assert_eq!(excerpt_around("short", 999, 10), "short");
    }

    #[test]
    fn recommendations_are_conservative() {
        assert!(recommendation_for(true, ConfidenceTier::High).contains("Manual review"));
        assert!(recommendation_for(false, ConfidenceTier::Low).contains("Manual review"));
        assert!(recommendation_for(false, ConfidenceTier::Medium).contains("Manual review"));
    }
}
