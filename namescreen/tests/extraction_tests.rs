//! External tests for the candidate extraction cascade.
//!
//! Covers stage merging, degraded operation without the recognizer, and
//! the conditions under which the generative fallback runs.

use async_trait::async_trait;
use namescreen::config::ExtractionConfig;
use namescreen::extraction::{
    ArticleExtractor, ExtractionMethod, GenerativeCandidateExtractor, NerCandidateExtractor,
    PatternCandidateExtractor,
};
use namescreen::services::{
    DisambiguationContext, DisambiguationVerdict, GenerativeService, NerService, NerSpan,
    ServiceError,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug)]
struct StubNer {
    spans: Vec<(String, usize)>,
    fail: bool,
}

impl StubNer {
    fn returning(spans: Vec<(&str, usize)>) -> Self {
        Self {
            spans: spans
                .into_iter()
                .map(|(text, start)| (text.to_string(), start))
                .collect(),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            spans: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl NerService for StubNer {
    async fn person_spans(&self, _text: &str) -> Result<Vec<NerSpan>, ServiceError> {
        if self.fail {
            return Err(ServiceError::Protocol("recognizer down".to_string()));
        }
        Ok(self
            .spans
            .iter()
            .map(|(text, start)| NerSpan {
                text: text.clone(),
                start: *start,
                end: start + text.len(),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "stub-ner"
    }
}

#[derive(Debug)]
struct StubGenerative {
    names: Vec<String>,
    extract_calls: AtomicUsize,
}

impl StubGenerative {
    fn returning(names: Vec<&str>) -> Self {
        Self {
            names: names.into_iter().map(String::from).collect(),
            extract_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GenerativeService for StubGenerative {
    async fn generate_variants(&self, _name: &str) -> Result<Vec<String>, ServiceError> {
        Ok(Vec::new())
    }

    async fn extract_names(&self, _text: &str) -> Result<Vec<String>, ServiceError> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.names.clone())
    }

    async fn disambiguate(
        &self,
        _context: &DisambiguationContext,
    ) -> Result<DisambiguationVerdict, ServiceError> {
        Err(ServiceError::Unconfigured("stub".to_string()))
    }

    fn name(&self) -> &str {
        "stub-generative"
    }
}

fn cascade(
    ner: Option<Arc<dyn NerService>>,
    generative: Option<Arc<dyn GenerativeService>>,
) -> ArticleExtractor {
    let timeout = Duration::from_secs(1);
    ArticleExtractor::new(
        NerCandidateExtractor::new(ner, timeout),
        PatternCandidateExtractor::new(4),
        GenerativeCandidateExtractor::new(generative, timeout),
        ExtractionConfig::default(),
    )
}

#[tokio::test]
async fn recognizer_spans_are_tagged_structured_parser() {
    let text = "witnesses saw michelle brown near the harbor.";
    let ner = Arc::new(StubNer::returning(vec![("michelle brown", 14)]));
    let extractor = cascade(Some(ner), None);

    let candidates = extractor.extract(text).await;

    let candidate = candidates
        .iter()
        .find(|c| c.text == "michelle brown")
        .expect("recognizer candidate");
    assert_eq!(candidate.method, ExtractionMethod::StructuredParser);
    assert_eq!(candidate.offset, 14);
}

#[tokio::test]
async fn recognizer_and_pattern_results_merge_without_duplicates() {
    let text = "Prosecutors said Bill Johnson defrauded investors.";
    let ner = Arc::new(StubNer::returning(vec![("Bill Johnson", 17)]));
    let extractor = cascade(Some(ner), None);

    let candidates = extractor.extract(text).await;

    let bills: Vec<_> = candidates
        .iter()
        .filter(|c| c.text.eq_ignore_ascii_case("bill johnson"))
        .collect();
    assert_eq!(bills.len(), 1);
    // First-seen stage wins the dedup, and the recognizer runs first
    assert_eq!(bills[0].method, ExtractionMethod::StructuredParser);
}

#[tokio::test]
async fn missing_recognizer_degrades_to_pattern_extraction() {
    let text = "Prosecutors said Bill Johnson defrauded investors.";
    let extractor = cascade(None, None);

    let candidates = extractor.extract(text).await;

    assert!(candidates.iter().any(|c| c.text == "Bill Johnson"));
    assert!(
        candidates
            .iter()
            .all(|c| c.method == ExtractionMethod::Pattern)
    );
}

#[tokio::test]
async fn fallback_runs_when_deterministic_stages_find_nothing() {
    let text = "the defendant, known locally by a nickname, was convicted.";
    let generative = Arc::new(StubGenerative::returning(vec!["lou the hammer"]));
    let ner = Arc::new(StubNer::returning(vec![]));
    let extractor = cascade(Some(ner), Some(generative.clone()));

    let candidates = extractor.extract(text).await;

    assert_eq!(generative.extract_calls.load(Ordering::SeqCst), 1);
    let candidate = candidates
        .iter()
        .find(|c| c.text == "lou the hammer")
        .expect("fallback candidate");
    assert_eq!(candidate.method, ExtractionMethod::FallbackGenerative);
}

#[tokio::test]
async fn fallback_runs_when_the_recognizer_is_down() {
    let text = "Prosecutors said Bill Johnson defrauded investors.";
    let generative = Arc::new(StubGenerative::returning(vec!["Bill Johnson"]));
    let ner = Arc::new(StubNer::failing());
    let extractor = cascade(Some(ner), Some(generative.clone()));

    let candidates = extractor.extract(text).await;

    assert_eq!(generative.extract_calls.load(Ordering::SeqCst), 1);
    assert!(candidates.iter().any(|c| c.text == "Bill Johnson"));
}

#[tokio::test]
async fn fallback_is_skipped_when_deterministic_stages_succeed() {
    let text = "Prosecutors said Bill Johnson defrauded investors.";
    let generative = Arc::new(StubGenerative::returning(vec!["Someone Else"]));
    let ner = Arc::new(StubNer::returning(vec![("Bill Johnson", 17)]));
    let extractor = cascade(Some(ner), Some(generative.clone()));

    let candidates = extractor.extract(text).await;

    assert_eq!(generative.extract_calls.load(Ordering::SeqCst), 0);
    assert!(!candidates.iter().any(|c| c.text == "Someone Else"));
}

#[tokio::test]
async fn malformed_text_never_errors() {
    let extractor = cascade(None, None);

    assert!(extractor.extract("").await.is_empty());
    assert!(extractor.extract("\u{0000}\u{FFFD} ..!!").await.is_empty());
    assert!(extractor.extract("      \n\n\t").await.is_empty());
}
