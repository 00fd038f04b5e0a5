//! Structured candidate extraction via the external recognizer.

use super::traits::CandidateExtractor;
use super::types::{Candidate, ExtractionMethod, ExtractionOutcome};
use crate::services::{NerService, with_timeout};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Cascade stage wrapping the person-entity recognizer service.
#[derive(Debug)]
pub struct NerCandidateExtractor {
    name: String,
    service: Option<Arc<dyn NerService>>,
    timeout: Duration,
}

impl NerCandidateExtractor {
    /// Create a recognizer stage. A None service means the stage always
    /// reports itself unavailable.
    pub fn new(service: Option<Arc<dyn NerService>>, timeout: Duration) -> Self {
        Self {
            name: "structured".to_string(),
            service,
            timeout,
        }
    }
}

#[async_trait]
impl CandidateExtractor for NerCandidateExtractor {
    async fn extract(&self, text: &str) -> ExtractionOutcome {
        let Some(service) = &self.service else {
            return ExtractionOutcome::Unavailable("recognizer not configured".to_string());
        };

        match with_timeout(self.timeout, service.person_spans(text)).await {
            Ok(spans) if spans.is_empty() => ExtractionOutcome::Empty,
            Ok(mut spans) => {
                spans.sort_by_key(|s| s.start);
                ExtractionOutcome::Found(
                    spans
                        .into_iter()
                        .map(|s| Candidate::new(s.text, ExtractionMethod::StructuredParser, s.start))
                        .collect(),
                )
            }
            Err(e) => {
                warn!(error = %e, "recognizer unavailable; cascade continues degraded");
                ExtractionOutcome::Unavailable(e.to_string())
            }
        }
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::StructuredParser
    }

    fn name(&self) -> &str {
        &self.name
    }
}
