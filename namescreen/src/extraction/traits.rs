//! Traits for candidate extraction stages.

use super::types::{ExtractionMethod, ExtractionOutcome};
use async_trait::async_trait;

/// One stage in the candidate extraction cascade.
#[async_trait]
pub trait CandidateExtractor: Send + Sync + std::fmt::Debug {
    /// Extract candidate person-name mentions from the given text.
    ///
    /// Never errors: dependency problems surface as
    /// [`ExtractionOutcome::Unavailable`].
    async fn extract(&self, text: &str) -> ExtractionOutcome;

    /// Which method tag this stage's candidates carry.
    fn method(&self) -> ExtractionMethod;

    /// Get the name of this extractor for identification purposes.
    fn name(&self) -> &str;
}
