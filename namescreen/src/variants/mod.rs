//! Name variant generation.
//!
//! Turns one target name into an ordered set of plausible surface forms:
//! the name itself, component recombinations, initials, reorderings,
//! diacritic-folded forms, nickname substitutions, and (when a generative
//! service is configured) culturally informed variants. The order of
//! derivation is stable; the match engine's tie-break rules depend on it.

mod cache;
mod nicknames;
mod types;

pub use cache::VariantCache;
pub use nicknames::substitutions;
pub use types::*;

use crate::config::VariantConfig;
use crate::services::{GenerativeService, NameParser, with_timeout};
use crate::text::{squash_whitespace, strip_diacritics};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Generates variant sets for target names, with per-process caching.
#[derive(Debug)]
pub struct VariantGenerator {
    parser: Arc<dyn NameParser>,
    generative: Option<Arc<dyn GenerativeService>>,
    config: VariantConfig,
    generative_timeout: Duration,
    cache: VariantCache,
    fingerprint: String,
}

/// Accumulates variants in derivation order with case-insensitive dedup.
struct VariantBuilder {
    variants: Vec<NameVariant>,
    seen: HashSet<String>,
}

impl VariantBuilder {
    fn new() -> Self {
        Self {
            variants: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, text: &str, kind: VariantKind) {
        let surface = squash_whitespace(text).to_lowercase();
        if surface.is_empty() {
            return;
        }
        let key = crate::text::dedup_key(&surface);
        if self.seen.insert(key) {
            self.variants.push(NameVariant::new(surface, kind));
        }
    }
}

impl VariantGenerator {
    /// Create a generator with the given parser, optional generative
    /// service, and configuration.
    pub fn new(
        parser: Arc<dyn NameParser>,
        generative: Option<Arc<dyn GenerativeService>>,
        config: VariantConfig,
        generative_timeout: Duration,
    ) -> Self {
        let cache = VariantCache::new(config.cache_size);
        // The generated output depends on the augmentation switch and on
        // whether a generative service is actually wired in.
        let fingerprint =
            VariantCache::fingerprint(&(config.augmentation, generative.is_some()));

        Self {
            parser,
            generative,
            config,
            generative_timeout,
            cache,
            fingerprint,
        }
    }

    /// Parse a raw name into an immutable [`TargetName`].
    pub fn parse(&self, raw: &str) -> TargetName {
        TargetName::new(squash_whitespace(raw), self.parser.parse(raw))
    }

    /// Generate the variant set for a target name.
    ///
    /// Idempotent per (name, config): repeat calls are served from the
    /// cache. On augmentation failure the deterministic set is returned
    /// with the outcome marked partial; this method never fails.
    pub async fn generate(&self, target: &TargetName) -> VariantSet {
        let key = VariantCache::key(&target.normalized(), &self.fingerprint);
        if let Some(cached) = self.cache.get(&key) {
            debug!(name = %target.raw, "variant cache hit");
            return cached;
        }

        let mut builder = VariantBuilder::new();
        self.derive_deterministic(target, &mut builder);
        let augmentation = self.augment(target, &mut builder).await;

        // The set is never empty: worst case the raw input itself stands in.
        if builder.variants.is_empty() {
            builder
                .variants
                .push(NameVariant::new(target.raw.to_lowercase(), VariantKind::Exact));
        }

        let set = VariantSet {
            variants: builder.variants,
            augmentation,
        };
        self.cache.insert(key, set.clone());
        set
    }

    fn derive_deterministic(&self, target: &TargetName, builder: &mut VariantBuilder) {
        let parsed = &target.parsed;
        let first = parsed.first.to_lowercase();
        let middle = parsed.middle.to_lowercase();
        let last = parsed.last.to_lowercase();

        // The name as given
        builder.push(&target.raw, VariantKind::Exact);

        if !first.is_empty() && !last.is_empty() {
            if !middle.is_empty() {
                builder.push(&format!("{first} {middle} {last}"), VariantKind::Exact);
            }
            builder.push(&format!("{first} {last}"), VariantKind::Exact);

            if let Some(initial) = first.chars().next() {
                builder.push(&format!("{initial}. {last}"), VariantKind::Initials);
                if let Some(mid_initial) = middle.chars().next() {
                    builder.push(
                        &format!("{first} {mid_initial}. {last}"),
                        VariantKind::Initials,
                    );
                }
            }

            for nick in substitutions(&first) {
                builder.push(&format!("{nick} {last}"), VariantKind::Nickname);
            }

            builder.push(&format!("{last}, {first}"), VariantKind::Reordered);
        }

        // Diacritic-folded rendition, when it differs
        let folded = strip_diacritics(&target.raw);
        if !folded.eq_ignore_ascii_case(&target.raw) {
            builder.push(&folded, VariantKind::CulturalNormalized);
        }
    }

    async fn augment(&self, target: &TargetName, builder: &mut VariantBuilder) -> AugmentationOutcome {
        if !self.config.augmentation {
            return AugmentationOutcome::Disabled;
        }

        let Some(service) = &self.generative else {
            return AugmentationOutcome::Unconfigured;
        };

        match with_timeout(self.generative_timeout, service.generate_variants(&target.raw)).await {
            Ok(generated) => {
                debug!(
                    name = %target.raw,
                    count = generated.len(),
                    "merged generative variants"
                );
                for variant in generated {
                    builder.push(&variant, VariantKind::CulturalNormalized);
                }
                AugmentationOutcome::Applied
            }
            Err(e) => {
                warn!(name = %target.raw, error = %e, "variant augmentation failed; continuing with deterministic set");
                AugmentationOutcome::Failed
            }
        }
    }
}
