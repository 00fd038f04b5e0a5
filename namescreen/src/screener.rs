//! The top-level screening pipeline.
//!
//! One [`Screener`] serves any number of concurrent requests. Within a
//! request, variant generation and candidate extraction run concurrently
//! and join before scoring; across requests the only shared state is the
//! variant cache.

use crate::config::ScreenConfig;
use crate::extraction::{
    ArticleExtractor, Candidate, GenerativeCandidateExtractor, NerCandidateExtractor,
    PatternCandidateExtractor,
};
use crate::matching::{MatchEngine, MatchResult};
use crate::services::{
    GenerativeService, HttpGenerativeClient, HttpNerClient, NameParser, NerService, RuleNameParser,
};
use crate::variants::{VariantGenerator, VariantSet};
use crate::{Result, ScreenError};
use std::sync::Arc;
use tracing::info;

/// Everything one request produced, for callers that want the working set
/// behind the decision (verbose CLI output, audit trails).
#[derive(Debug, Clone)]
pub struct ScreeningReport {
    /// The final decision
    pub result: MatchResult,
    /// The generated variant set
    pub variants: VariantSet,
    /// The extracted candidate mentions
    pub candidates: Vec<Candidate>,
}

/// The assembled screening pipeline.
#[derive(Debug)]
pub struct Screener {
    generator: VariantGenerator,
    extractor: ArticleExtractor,
    engine: MatchEngine,
}

impl Screener {
    /// Build a screener from configuration, constructing external-service
    /// clients from the environment. A missing generative credential
    /// disables augmentation and disambiguation; a missing recognizer
    /// endpoint degrades extraction. Neither is an error.
    pub fn new(config: ScreenConfig) -> Result<Self> {
        let generative = HttpGenerativeClient::from_env(&config.services.generative)
            .map(|client| Arc::new(client) as Arc<dyn GenerativeService>);
        let ner = HttpNerClient::from_config(&config.services.ner)
            .map(|client| Arc::new(client) as Arc<dyn NerService>);

        if generative.is_none() {
            info!(
                "no generative credential in {}; augmentation and disambiguation disabled",
                config.services.generative.api_key_env
            );
        }
        if ner.is_none() {
            info!("no recognizer endpoint configured; structured extraction disabled");
        }

        Self::with_services(config, Arc::new(RuleNameParser::new()), ner, generative)
    }

    /// Build a screener with explicitly injected services. This is the
    /// seam the tests use; `new` is a thin wrapper over it.
    pub fn with_services(
        config: ScreenConfig,
        parser: Arc<dyn NameParser>,
        ner: Option<Arc<dyn NerService>>,
        generative: Option<Arc<dyn GenerativeService>>,
    ) -> Result<Self> {
        config.validate()?;

        let generative_timeout = config.services.generative.timeout;
        let ner_timeout = config.services.ner.timeout;

        let generator = VariantGenerator::new(
            parser,
            generative.clone(),
            config.variants.clone(),
            generative_timeout,
        );

        let extractor = ArticleExtractor::new(
            NerCandidateExtractor::new(ner, ner_timeout),
            PatternCandidateExtractor::new(config.extraction.max_pattern_tokens),
            GenerativeCandidateExtractor::new(generative.clone(), generative_timeout),
            config.extraction.clone(),
        );

        let engine = MatchEngine::new(config.thresholds, generative, generative_timeout);

        Ok(Self {
            generator,
            extractor,
            engine,
        })
    }

    /// Screen one (target name, article) request and return the decision.
    ///
    /// The only failure mode is invalid input; every other condition
    /// degrades into the returned [`MatchResult`].
    pub async fn screen(&self, target_name: &str, article_text: &str) -> Result<MatchResult> {
        Ok(self.screen_report(target_name, article_text).await?.result)
    }

    /// Screen one request and return the full working set alongside the
    /// decision.
    pub async fn screen_report(
        &self,
        target_name: &str,
        article_text: &str,
    ) -> Result<ScreeningReport> {
        let target_name = target_name.trim();
        if target_name.is_empty() {
            return Err(ScreenError::InvalidInput(
                "target name must not be empty".to_string(),
            ));
        }

        let target = self.generator.parse(target_name);

        // Independent halves of the pipeline; scoring joins on both.
        let (variants, candidates) = tokio::join!(
            self.generator.generate(&target),
            self.extractor.extract(article_text),
        );

        let result = self
            .engine
            .evaluate(&target, &variants, &candidates, article_text)
            .await;

        Ok(ScreeningReport {
            result,
            variants,
            candidates,
        })
    }
}
