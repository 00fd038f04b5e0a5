//! Confidence tier classification.
//!
//! A pure mapping from similarity score to confidence tier and the action
//! that tier drives. The thresholds partition [0,100] exactly; validation
//! in the config layer guarantees no overlap and no gap.

use crate::config::TierThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence tier for a match decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// String tag ("HIGH"/"MEDIUM"/"LOW").
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "HIGH",
            ConfidenceTier::Medium => "MEDIUM",
            ConfidenceTier::Low => "LOW",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the pipeline should do with a score in a given tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Decide algorithmically, no external consultation
    AutoDecide,
    /// Consult the disambiguation delegate
    Disambiguate,
    /// Route to a human analyst regardless of the boolean outcome
    ManualReview,
}

/// Classify a score into its tier and the action that tier drives.
pub fn classify(score: f64, thresholds: &TierThresholds) -> (ConfidenceTier, RecommendedAction) {
    if score >= thresholds.high {
        (ConfidenceTier::High, RecommendedAction::AutoDecide)
    } else if score >= thresholds.medium {
        (ConfidenceTier::Medium, RecommendedAction::Disambiguate)
    } else {
        (ConfidenceTier::Low, RecommendedAction::ManualReview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TierThresholds {
        TierThresholds::default()
    }

    #[test]
    fn partitions_the_domain_strictly() {
        let thresholds = defaults();
        for score in 0..=100 {
            let score = score as f64;
            let (tier, _) = classify(score, &thresholds);
            let expected = if score >= 85.0 {
                ConfidenceTier::High
            } else if score >= 70.0 {
                ConfidenceTier::Medium
            } else {
                ConfidenceTier::Low
            };
            assert_eq!(tier, expected, "score {score}");
        }
    }

    #[test]
    fn boundary_scores_land_in_the_upper_tier() {
        let thresholds = defaults();
        assert_eq!(classify(85.0, &thresholds).0, ConfidenceTier::High);
        assert_eq!(classify(84.999, &thresholds).0, ConfidenceTier::Medium);
        assert_eq!(classify(70.0, &thresholds).0, ConfidenceTier::Medium);
        assert_eq!(classify(69.999, &thresholds).0, ConfidenceTier::Low);
    }

    #[test]
    fn actions_follow_tiers() {
        let thresholds = defaults();
        assert_eq!(classify(90.0, &thresholds).1, RecommendedAction::AutoDecide);
        assert_eq!(
            classify(75.0, &thresholds).1,
            RecommendedAction::Disambiguate
        );
        assert_eq!(
            classify(10.0, &thresholds).1,
            RecommendedAction::ManualReview
        );
    }
}
