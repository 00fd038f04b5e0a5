//! HTTP client for an external named-entity recognizer service.
//!
//! Expects a small sidecar exposing `POST /extract` with `{"text": ...}` and
//! answering `{"entities": [{"text", "label", "start", "end"}]}` — the shape
//! spaCy-style recognizer services commonly serve. Only person-labelled
//! spans are surfaced.

use super::ServiceError;
use super::traits::{NerService, NerSpan};
use crate::config::NerConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Recognizer service client
#[derive(Debug, Clone)]
pub struct HttpNerClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    entities: Vec<NerEntity>,
}

#[derive(Debug, Deserialize)]
struct NerEntity {
    text: String,
    label: String,
    #[serde(default)]
    start: usize,
    #[serde(default)]
    end: usize,
}

impl HttpNerClient {
    /// Build a client from configuration. Returns None when no endpoint is
    /// configured; callers treat None as "recognizer unavailable" and the
    /// extraction cascade skips the structured stage.
    pub fn from_config(config: &NerConfig) -> Option<Self> {
        let endpoint = config.endpoint.as_ref()?.trim().to_string();
        if endpoint.is_empty() {
            return None;
        }

        let client = match Client::builder().timeout(config.timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("failed to build recognizer HTTP client: {e}");
                return None;
            }
        };

        Some(Self { client, endpoint })
    }
}

#[async_trait]
impl NerService for HttpNerClient {
    async fn person_spans(&self, text: &str) -> Result<Vec<NerSpan>, ServiceError> {
        debug!("sending recognizer request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&NerRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Protocol(format!(
                "recognizer answered HTTP {status}"
            )));
        }

        let parsed: NerResponse = response.json().await?;

        Ok(parsed
            .entities
            .into_iter()
            .filter(|e| matches!(e.label.to_uppercase().as_str(), "PERSON" | "PER"))
            .map(|e| NerSpan {
                text: e.text,
                start: e.start,
                end: e.end,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "http-ner"
    }
}
