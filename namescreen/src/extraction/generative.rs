//! Generative fallback candidate extraction.
//!
//! Last stage of the cascade; only consulted when the deterministic stages
//! come up empty or the recognizer is unavailable.

use super::traits::CandidateExtractor;
use super::types::{Candidate, ExtractionMethod, ExtractionOutcome};
use crate::services::{GenerativeService, with_timeout};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Cascade stage asking the generative service to list person names.
#[derive(Debug)]
pub struct GenerativeCandidateExtractor {
    name: String,
    service: Option<Arc<dyn GenerativeService>>,
    timeout: Duration,
}

impl GenerativeCandidateExtractor {
    /// Create a generative fallback stage. A None service means the stage
    /// always reports itself unavailable.
    pub fn new(service: Option<Arc<dyn GenerativeService>>, timeout: Duration) -> Self {
        Self {
            name: "generative-fallback".to_string(),
            service,
            timeout,
        }
    }

    /// Locate a reported name in the source text, case-insensitively.
    fn locate(text: &str, name: &str) -> usize {
        text.to_lowercase()
            .find(&name.to_lowercase())
            .unwrap_or(0)
    }
}

#[async_trait]
impl CandidateExtractor for GenerativeCandidateExtractor {
    async fn extract(&self, text: &str) -> ExtractionOutcome {
        let Some(service) = &self.service else {
            return ExtractionOutcome::Unavailable("generative service not configured".to_string());
        };

        match with_timeout(self.timeout, service.extract_names(text)).await {
            Ok(names) if names.is_empty() => ExtractionOutcome::Empty,
            Ok(names) => ExtractionOutcome::Found(
                names
                    .into_iter()
                    .map(|name| {
                        let offset = Self::locate(text, &name);
                        Candidate::new(name, ExtractionMethod::FallbackGenerative, offset)
                    })
                    .collect(),
            ),
            Err(e) => {
                warn!(error = %e, "generative extraction failed; no fallback candidates");
                ExtractionOutcome::Unavailable(e.to_string())
            }
        }
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::FallbackGenerative
    }

    fn name(&self) -> &str {
        &self.name
    }
}
