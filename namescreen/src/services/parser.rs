//! Deterministic rule-based name parser.

use super::traits::{NameParser, ParsedName};
use crate::text::squash_whitespace;

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "dame", "rev", "hon",
];

const SUFFIXES: &[&str] = &["jr", "sr", "ii", "iii", "iv", "v", "esq", "phd", "md"];

/// Default name parser: honorific stripping, suffix detection, positional
/// first/middle/last split. Never fails; unparseable input degrades to a
/// whole-string last name.
#[derive(Debug, Clone, Default)]
pub struct RuleNameParser;

impl RuleNameParser {
    /// Create a new rule-based parser.
    pub fn new() -> Self {
        Self
    }

    fn classify_token(token: &str) -> String {
        token
            .trim_matches(|c: char| c == '.' || c == ',')
            .to_lowercase()
    }
}

impl NameParser for RuleNameParser {
    fn parse(&self, raw: &str) -> ParsedName {
        let cleaned = squash_whitespace(raw);
        let mut tokens: Vec<&str> = cleaned.split(' ').filter(|t| !t.is_empty()).collect();

        // Leading honorifics
        while let Some(first) = tokens.first() {
            if HONORIFICS.contains(&Self::classify_token(first).as_str()) {
                tokens.remove(0);
            } else {
                break;
            }
        }

        // Trailing suffixes, outermost first
        let mut suffixes: Vec<String> = Vec::new();
        while let Some(last) = tokens.last() {
            let key = Self::classify_token(last);
            if tokens.len() > 1 && SUFFIXES.contains(&key.as_str()) {
                suffixes.insert(0, key);
                tokens.pop();
            } else {
                break;
            }
        }

        let suffix = suffixes.join(" ");

        match tokens.len() {
            0 => ParsedName {
                last: cleaned,
                degraded: true,
                ..Default::default()
            },
            1 => ParsedName {
                last: tokens[0].to_string(),
                suffix,
                ..Default::default()
            },
            2 => ParsedName {
                first: tokens[0].to_string(),
                last: tokens[1].to_string(),
                suffix,
                ..Default::default()
            },
            n => ParsedName {
                first: tokens[0].to_string(),
                middle: tokens[1..n - 1].join(" "),
                last: tokens[n - 1].to_string(),
                suffix,
                ..Default::default()
            },
        }
    }

    fn name(&self) -> &str {
        "rule"
    }
}
