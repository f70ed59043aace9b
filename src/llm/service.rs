//! The `GenerationService` boundary and its error type.
//!
//! Everything past this trait is an opaque prompt → text call.  The summary
//! generator only ever sees `Result<String, GenerationError>`.

use async_trait::async_trait;
use thiserror::Error;

// ---------------------------------------------------------------------------
// GenerationError
// ---------------------------------------------------------------------------

/// Errors that can occur while calling the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service answered with a non-success status.  `message` is the
    /// service's own error detail when it sent one, else the status reason.
    #[error("Gemini API error: {message}")]
    Api { status: u16, message: String },

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request exceeded the optional client timeout.
    #[error("generation request timed out")]
    Timeout,

    /// A success response whose body was not the expected JSON.
    #[error("failed to parse generation response: {0}")]
    Parse(String),

    /// A success response carrying no usable candidate text.
    #[error("No response generated from Gemini API")]
    EmptyResponse,

    /// The client was configured without an API key.
    #[error("Gemini API key is required")]
    MissingApiKey,

    /// The API key cannot be sent as an HTTP header value.
    #[error("invalid API key header: {0}")]
    InvalidApiKey(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// GenerationService trait
// ---------------------------------------------------------------------------

/// Async single-prompt text generation.
///
/// Implementors must be `Send + Sync` so they can be shared behind
/// `Arc<dyn GenerationService>`.  No retries are expected: one call, one
/// outcome.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
