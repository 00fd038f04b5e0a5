//! Types for name variant generation.

use crate::services::ParsedName;
use serde::{Deserialize, Serialize};

/// A target individual's name: the raw input plus its parsed components.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    /// The raw input string, whitespace-squashed
    pub raw: String,
    /// Parsed components (possibly degraded)
    pub parsed: ParsedName,
}

impl TargetName {
    /// Create a target name from raw input and its parse.
    pub fn new(raw: impl Into<String>, parsed: ParsedName) -> Self {
        Self {
            raw: raw.into(),
            parsed,
        }
    }

    /// Normalized form used for cache keys and comparison.
    pub fn normalized(&self) -> String {
        crate::text::normalize_for_match(&self.raw)
    }
}

/// How a variant surface form was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    /// The name as given (or its core first+last form)
    Exact,
    /// Nickname substitution on the first-name component
    Nickname,
    /// Initialized given name ("w. johnson")
    Initials,
    /// Reordered components ("johnson, william")
    Reordered,
    /// Diacritic-folded or culturally informed form
    CulturalNormalized,
}

impl VariantKind {
    /// String tag for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Exact => "exact",
            VariantKind::Nickname => "nickname",
            VariantKind::Initials => "initials",
            VariantKind::Reordered => "reordered",
            VariantKind::CulturalNormalized => "cultural-normalized",
        }
    }

    /// Tie-break rank: exact beats nickname/initials, which beat
    /// reordered/cultural forms. Lower is stronger.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            VariantKind::Exact => 0,
            VariantKind::Nickname | VariantKind::Initials => 1,
            VariantKind::Reordered | VariantKind::CulturalNormalized => 2,
        }
    }
}

/// One generated surface form of the target name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameVariant {
    /// The surface form (lowercased, whitespace-squashed)
    pub text: String,
    /// How this form was derived
    pub kind: VariantKind,
}

impl NameVariant {
    /// Create a new variant.
    pub fn new(text: impl Into<String>, kind: VariantKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Outcome of the generative augmentation step, carried alongside the
/// variants so the explanation layer can flag degraded generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AugmentationOutcome {
    /// Generative variants were merged in
    Applied,
    /// Augmentation turned off in configuration
    Disabled,
    /// No generative service configured (missing credential)
    Unconfigured,
    /// The service was called but errored or timed out; deterministic
    /// variants stand alone ("variants: partial")
    Failed,
}

impl AugmentationOutcome {
    /// True when augmentation was attempted but did not complete.
    pub fn is_partial(&self) -> bool {
        matches!(self, AugmentationOutcome::Failed)
    }
}

/// The generated variant collection for one target name.
///
/// Ordered and deduplicated: iteration order is the deterministic
/// enumeration order the match engine's tie-break rules depend on. Always
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSet {
    /// The variants, in derivation order
    pub variants: Vec<NameVariant>,
    /// What happened to the augmentation step
    pub augmentation: AugmentationOutcome,
}

impl VariantSet {
    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set is empty (never true for generator output).
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate the variants in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &NameVariant> {
        self.variants.iter()
    }

    /// The variant surface forms, for display.
    pub fn texts(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.text.as_str()).collect()
    }
}
