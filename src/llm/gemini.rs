//! Google Gemini `generateContent` client.
//!
//! [`GeminiClient`] implements [`GenerationService`] with the fixed sampling
//! parameters and safety thresholds used for clinical documentation.  All
//! connection details come from [`GenerationConfig`].

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::GenerationConfig;

use super::service::{GenerationError, GenerationService};

/// Harm categories sent with every request, each blocking only high-severity
/// matches.
pub const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

const SAFETY_THRESHOLD: &str = "BLOCK_ONLY_HIGH";

// -- Response types --

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

pub struct GeminiClient {
    client: reqwest::Client,
    config: GenerationConfig,
    api_key: HeaderValue,
}

impl GeminiClient {
    /// Build a client from config.  Fails when no non-empty API key is set.
    ///
    /// A timeout is only applied when `config.timeout_secs` is set.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenerationError::MissingApiKey)?;
        let mut api_key =
            HeaderValue::from_str(key).map_err(|e| GenerationError::InvalidApiKey(e.to_string()))?;
        api_key.set_sensitive(true);

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// `{base_url}/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    pub fn build_request_body(config: &GenerationConfig, prompt: &str) -> serde_json::Value {
        let safety: Vec<serde_json::Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| serde_json::json!({ "category": category, "threshold": SAFETY_THRESHOLD }))
            .collect();

        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature":     config.temperature,
                "topK":            config.top_k,
                "topP":            config.top_p,
                "maxOutputTokens": config.max_output_tokens
            },
            "safetySettings": safety
        })
    }

    /// Text of the first part of the first candidate, if it is non-blank.
    pub fn extract_text(response: &GeminiResponse) -> Option<String> {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_ref())
            .filter(|text| !text.trim().is_empty())
            .cloned()
    }

    /// Error detail for a non-success response: the service's own
    /// `error.message` when present, else the HTTP reason phrase.
    pub fn api_error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<GeminiErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), str::to_string)
            })
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = Self::build_request_body(&self.config, prompt);

        log::debug!(
            "gemini: generateContent model={} prompt={} chars",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("x-goog-api-key", self.api_key.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = Self::api_error_message(status, &error_body);
            log::error!("gemini: request failed with {status}: {message}");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        let text = Self::extract_text(&parsed).ok_or(GenerationError::EmptyResponse)?;
        log::debug!("gemini: received {} chars", text.len());
        Ok(text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
