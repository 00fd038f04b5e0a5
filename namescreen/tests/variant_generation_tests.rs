//! External tests for name variant generation.
//!
//! Covers the deterministic derivations, nickname substitution, the
//! augmentation fallback path, and cache idempotence.

use async_trait::async_trait;
use namescreen::config::VariantConfig;
use namescreen::services::{
    DisambiguationContext, DisambiguationVerdict, GenerativeService, RuleNameParser, ServiceError,
};
use namescreen::variants::{AugmentationOutcome, VariantGenerator, VariantKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug)]
struct StubGenerative {
    variants: Vec<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubGenerative {
    fn returning(variants: Vec<&str>) -> Self {
        Self {
            variants: variants.into_iter().map(String::from).collect(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            variants: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GenerativeService for StubGenerative {
    async fn generate_variants(&self, _name: &str) -> Result<Vec<String>, ServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(ServiceError::Protocol("stub failure".to_string()))
        } else {
            Ok(self.variants.clone())
        }
    }

    async fn extract_names(&self, _text: &str) -> Result<Vec<String>, ServiceError> {
        Ok(Vec::new())
    }

    async fn disambiguate(
        &self,
        _context: &DisambiguationContext,
    ) -> Result<DisambiguationVerdict, ServiceError> {
        Err(ServiceError::Unconfigured("stub".to_string()))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

fn deterministic_generator() -> VariantGenerator {
    VariantGenerator::new(
        Arc::new(RuleNameParser::new()),
        None,
        VariantConfig::default(),
        Duration::from_secs(1),
    )
}

#[tokio::test]
async fn variant_set_is_non_empty_and_contains_the_normalized_original() {
    let generator = deterministic_generator();
    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    assert!(!set.is_empty());
    assert!(set.texts().contains(&"william johnson"));
}

#[tokio::test]
async fn nickname_substitutions_are_generated() {
    let generator = deterministic_generator();
    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    let nickname = set
        .iter()
        .find(|v| v.text == "bill johnson")
        .expect("nickname variant");
    assert_eq!(nickname.kind, VariantKind::Nickname);
}

#[tokio::test]
async fn initials_and_reordered_forms_are_generated() {
    let generator = deterministic_generator();
    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    assert!(set.iter().any(|v| v.text == "w. johnson" && v.kind == VariantKind::Initials));
    assert!(
        set.iter()
            .any(|v| v.text == "johnson, william" && v.kind == VariantKind::Reordered)
    );
}

#[tokio::test]
async fn middle_names_produce_dropped_and_initialized_forms() {
    let generator = deterministic_generator();
    let target = generator.parse("James Robert Smith");
    let set = generator.generate(&target).await;

    assert!(set.texts().contains(&"james robert smith"));
    assert!(set.texts().contains(&"james smith"));
    assert!(set.texts().contains(&"james r. smith"));
    assert!(set.texts().contains(&"jim smith"));
}

#[tokio::test]
async fn diacritics_yield_a_cultural_normalized_form() {
    let generator = deterministic_generator();
    let target = generator.parse("José García");
    let set = generator.generate(&target).await;

    assert!(
        set.iter()
            .any(|v| v.text == "jose garcia" && v.kind == VariantKind::CulturalNormalized)
    );
}

#[tokio::test]
async fn malformed_input_still_yields_a_variant() {
    let generator = deterministic_generator();
    let target = generator.parse("12345");
    let set = generator.generate(&target).await;

    assert!(!set.is_empty());
}

#[tokio::test]
async fn unconfigured_augmentation_is_flagged() {
    let generator = deterministic_generator();
    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    assert_eq!(set.augmentation, AugmentationOutcome::Unconfigured);
}

#[tokio::test]
async fn augmentation_merges_and_dedupes_generated_variants() {
    let stub = Arc::new(StubGenerative::returning(vec![
        "Guillermo Johnson",
        "BILL JOHNSON",
    ]));
    let generator = VariantGenerator::new(
        Arc::new(RuleNameParser::new()),
        Some(stub.clone()),
        VariantConfig::default(),
        Duration::from_secs(1),
    );

    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    assert_eq!(set.augmentation, AugmentationOutcome::Applied);
    assert!(set.texts().contains(&"guillermo johnson"));
    // The nickname form was already derived deterministically
    let bills = set.iter().filter(|v| v.text == "bill johnson").count();
    assert_eq!(bills, 1);
}

#[tokio::test]
async fn augmentation_failure_falls_open_to_the_deterministic_set() {
    let generator = VariantGenerator::new(
        Arc::new(RuleNameParser::new()),
        Some(Arc::new(StubGenerative::failing())),
        VariantConfig::default(),
        Duration::from_secs(1),
    );

    let target = generator.parse("William Johnson");
    let set = generator.generate(&target).await;

    assert_eq!(set.augmentation, AugmentationOutcome::Failed);
    assert!(set.augmentation.is_partial());
    assert!(set.texts().contains(&"william johnson"));
    assert!(set.texts().contains(&"bill johnson"));
}

#[tokio::test]
async fn generation_is_idempotent_and_served_from_cache() {
    let stub = Arc::new(StubGenerative::returning(vec!["Guillermo Johnson"]));
    let generator = VariantGenerator::new(
        Arc::new(RuleNameParser::new()),
        Some(stub.clone()),
        VariantConfig::default(),
        Duration::from_secs(1),
    );

    let target = generator.parse("William Johnson");
    let first = generator.generate(&target).await;
    let second = generator.generate(&target).await;

    assert_eq!(first, second);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}
