//! HTTP client for the external generative reasoning service.
//!
//! Speaks the chat-completions wire format. The credential is read from the
//! environment at construction time; when it is absent the client is simply
//! not built and every dependent capability degrades.

use super::ServiceError;
use super::traits::{DisambiguationContext, DisambiguationVerdict, GenerativeService};
use crate::config::GenerativeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Generative service client
#[derive(Debug, Clone)]
pub struct HttpGenerativeClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

/// Chat-completions request format
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

/// A single chat message
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// A single response choice
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

/// Response message content
#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl HttpGenerativeClient {
    /// Build a client from configuration, reading the API credential from
    /// the environment. Returns None when the credential is absent or the
    /// HTTP client cannot be constructed; callers treat None as "generative
    /// capabilities disabled".
    pub fn from_env(config: &GenerativeConfig) -> Option<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        Self::with_key(config, api_key)
    }

    /// Build a client with an explicit credential.
    pub fn with_key(config: &GenerativeConfig, api_key: String) -> Option<Self> {
        let client = match Client::builder().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("failed to build generative HTTP client: {e}");
                return None;
            }
        };

        Some(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// Send one chat completion and return the raw assistant content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, ServiceError> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: 0.0,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!("sending generative request to {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Protocol(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ServiceError::Protocol("response contained no choices".to_string()))
    }

    /// Strip markdown code fences some models insist on wrapping JSON in.
    fn strip_fences(content: &str) -> &str {
        let trimmed = content.trim();
        let without_open = trimmed
            .strip_prefix("```json")
            .or_else(|| trimmed.strip_prefix("```"))
            .unwrap_or(trimmed);
        without_open
            .strip_suffix("```")
            .unwrap_or(without_open)
            .trim()
    }

    fn parse_string_array(content: &str) -> Result<Vec<String>, ServiceError> {
        let body = Self::strip_fences(content);
        let values: Vec<String> = serde_json::from_str(body)
            .map_err(|e| ServiceError::Protocol(format!("expected a JSON string array: {e}")))?;
        Ok(values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect())
    }
}

#[async_trait]
impl GenerativeService for HttpGenerativeClient {
    async fn generate_variants(&self, name: &str) -> Result<Vec<String>, ServiceError> {
        let system = "You generate alternate surface forms of personal names for \
                      compliance screening: localized orderings, transliterations, \
                      honorific-free forms, and common cultural spellings. \
                      Respond ONLY with a JSON array of strings.";
        let user = format!("Generate up to 10 plausible name variants for: {name}");

        let content = self.complete(system, &user).await?;
        Self::parse_string_array(&content)
    }

    async fn extract_names(&self, text: &str) -> Result<Vec<String>, ServiceError> {
        let system = "You extract the full names of people mentioned in a news \
                      article. List each distinct person once, exactly as written. \
                      Respond ONLY with a JSON array of strings.";
        let user = format!("Extract every person name from this article:\n\n{text}");

        let content = self.complete(system, &user).await?;
        Self::parse_string_array(&content)
    }

    async fn disambiguate(
        &self,
        context: &DisambiguationContext,
    ) -> Result<DisambiguationVerdict, ServiceError> {
        let system = "You are an adverse-media screening analyst. Decide whether a \
                      name mentioned in an article refers to the target individual. \
                      Respond ONLY with JSON: {\"is_match\": bool, \"rationale\": string}.";
        let user = format!(
            "Target individual: {target}\n\
             Name variant considered: {variant}\n\
             Name found in article: {candidate}\n\
             Heuristic similarity score: {score:.1}/100\n\
             Article excerpt:\n{excerpt}\n\n\
             Does the article refer to the target individual?",
            target = context.target_name,
            variant = context.variant,
            candidate = context.candidate,
            score = context.heuristic_score,
            excerpt = context.excerpt,
        );

        let content = self.complete(system, &user).await?;
        let body = Self::strip_fences(&content);
        serde_json::from_str(body)
            .map_err(|e| ServiceError::Protocol(format!("malformed disambiguation verdict: {e}")))
    }

    fn name(&self) -> &str {
        "http-generative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plain_fences() {
        assert_eq!(
            HttpGenerativeClient::strip_fences("```json\n[\"a\"]\n```"),
            "[\"a\"]"
        );
        assert_eq!(HttpGenerativeClient::strip_fences("[\"a\"]"), "[\"a\"]");
    }

    #[test]
    fn parses_string_arrays() {
        let names = HttpGenerativeClient::parse_string_array("[\"Bill Johnson\", \" \"]").unwrap();
        assert_eq!(names, vec!["Bill Johnson".to_string()]);
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(HttpGenerativeClient::parse_string_array("{\"oops\": 1}").is_err());
    }
}
