//! External service seams consumed by the screening pipeline.
//!
//! Every capability the engine borrows from outside (name parsing, named
//! entity recognition, generative augmentation/extraction/disambiguation)
//! is expressed as a trait here, with HTTP-backed default implementations.
//! Call sites own the fallback policy: a failing service degrades the
//! pipeline, it never aborts it.

mod generative;
mod ner;
mod parser;
mod traits;

pub use generative::HttpGenerativeClient;
pub use ner::HttpNerClient;
pub use parser::RuleNameParser;
pub use traits::*;

use std::future::Future;
use std::time::Duration;

/// Error type for external service calls
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The call exceeded its configured deadline
    #[error("service call timed out after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered, but not in the agreed shape
    #[error("protocol error: {0}")]
    Protocol(String),

    /// No client is configured for this capability
    #[error("service not configured: {0}")]
    Unconfigured(String),
}

/// Bound a service call by a deadline, mapping expiry onto
/// [`ServiceError::Timeout`].
pub(crate) async fn with_timeout<T, F>(
    limit: Duration,
    fut: F,
) -> std::result::Result<T, ServiceError>
where
    F: Future<Output = std::result::Result<T, ServiceError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ServiceError::Timeout(limit)),
    }
}
