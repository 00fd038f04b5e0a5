//! Pattern-based candidate extraction using regular expressions.
//!
//! Catches name-like capitalized sequences the recognizer misses. Runs on
//! every request; it is the one stage with no external dependency.

use super::traits::CandidateExtractor;
use super::types::{Candidate, ExtractionMethod, ExtractionOutcome};
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

/// Words that start or end a capitalized run without being part of a name:
/// sentence-initial function words and common titles.
const NON_NAME_TOKENS: &[&str] = &[
    "the", "a", "an", "in", "on", "at", "by", "of", "for", "to", "he", "she", "it", "they", "we",
    "but", "and", "or", "if", "when", "while", "after", "before", "however", "meanwhile",
    "according", "mr", "mrs", "ms", "dr", "prof", "professor", "president", "senator", "governor",
    "judge", "sir", "chief", "officer", "detective",
];

/// Pattern-based candidate extractor.
#[derive(Debug)]
pub struct PatternCandidateExtractor {
    name: String,
    max_tokens: usize,
}

impl PatternCandidateExtractor {
    /// Create a pattern extractor keeping sequences of up to `max_tokens`
    /// tokens.
    pub fn new(max_tokens: usize) -> Self {
        Self {
            name: "pattern".to_string(),
            max_tokens,
        }
    }

    fn is_non_name(token: &str) -> bool {
        let key = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        NON_NAME_TOKENS.contains(&key.as_str())
    }

    /// Trim non-name tokens off both ends of a matched run. Returns the
    /// kept slice's byte offset within the match and its text, or None when
    /// fewer than two name tokens remain.
    fn trim_run(run: &str) -> Option<(usize, &str)> {
        lazy_static! {
            static ref TOKEN_REGEX: Regex = Regex::new(r"\S+").unwrap();
        }

        let tokens: Vec<regex::Match<'_>> = TOKEN_REGEX.find_iter(run).collect();

        let mut start = 0;
        while start < tokens.len() && Self::is_non_name(tokens[start].as_str()) {
            start += 1;
        }
        let mut end = tokens.len();
        while end > start && Self::is_non_name(tokens[end - 1].as_str()) {
            end -= 1;
        }

        if end - start < 2 {
            return None;
        }

        let byte_start = tokens[start].start();
        let byte_end = tokens[end - 1].end();
        Some((byte_start, &run[byte_start..byte_end]))
    }
}

#[async_trait]
impl CandidateExtractor for PatternCandidateExtractor {
    async fn extract(&self, text: &str) -> ExtractionOutcome {
        lazy_static! {
            static ref NAME_RUN_REGEX: Regex = Regex::new(
                r"\b[A-Z][a-z]+(?:['\-][A-Z][a-z]+)?(?:\s+(?:[A-Z]\.\s*)?[A-Z][a-z]+(?:['\-][A-Z][a-z]+)?){1,3}\b"
            )
            .unwrap();
        }

        let mut candidates = Vec::new();

        for m in NAME_RUN_REGEX.find_iter(text) {
            let Some((rel_offset, kept)) = Self::trim_run(m.as_str()) else {
                continue;
            };
            if kept.split_whitespace().count() > self.max_tokens {
                continue;
            }
            candidates.push(Candidate::new(
                kept,
                ExtractionMethod::Pattern,
                m.start() + rel_offset,
            ));
        }

        if candidates.is_empty() {
            ExtractionOutcome::Empty
        } else {
            ExtractionOutcome::Found(candidates)
        }
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::Pattern
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_capitalized_names() {
        let extractor = PatternCandidateExtractor::new(4);
        let outcome = extractor
            .extract("Local businessman Bill Johnson was arraigned on Tuesday.")
            .await;

        let candidates = outcome.candidates().to_vec();
        assert!(candidates.iter().any(|c| c.text == "Bill Johnson"));
    }

    #[tokio::test]
    async fn strips_leading_titles() {
        let extractor = PatternCandidateExtractor::new(4);
        let outcome = extractor.extract("Dr Mary Anne Clark spoke first.").await;

        let candidates = outcome.candidates().to_vec();
        assert!(candidates.iter().any(|c| c.text == "Mary Anne Clark"));
        assert!(!candidates.iter().any(|c| c.text.starts_with("Dr")));
    }

    #[tokio::test]
    async fn single_capitalized_words_are_ignored() {
        let extractor = PatternCandidateExtractor::new(4);
        let outcome = extractor.extract("Tuesday was uneventful in Springfield.").await;
        assert!(matches!(outcome, ExtractionOutcome::Empty));
    }

    #[tokio::test]
    async fn offsets_point_at_the_kept_text() {
        let extractor = PatternCandidateExtractor::new(4);
        let text = "Witnesses named Bill Johnson at the scene.";
        let outcome = extractor.extract(text).await;

        let candidate = outcome
            .candidates()
            .iter()
            .find(|c| c.text == "Bill Johnson")
            .cloned()
            .unwrap();
        assert_eq!(&text[candidate.offset..candidate.offset + 12], "Bill Johnson");
    }
}
