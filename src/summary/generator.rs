//! [`SummaryGenerator`] — transcript in, SOAP note or quick summary out.

use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::llm::{GeminiClient, GenerationError, GenerationService};
use crate::soap::{parse_soap_note, PromptBuilder, SoapRecord};
use crate::transcript::{format_transcript, PatientInfo, SpeechSegment};

use super::guard::InFlight;

// ---------------------------------------------------------------------------
// SummaryError
// ---------------------------------------------------------------------------

/// Errors surfaced to callers of [`SummaryGenerator`].
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Another `generate_summary` call on this instance has not finished.
    #[error("Summary generation already in progress")]
    InProgress,

    /// The transcript had no segments.
    #[error("No transcript available to summarize")]
    EmptyTranscript,

    /// The generation service failed or returned nothing usable.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

// ---------------------------------------------------------------------------
// SummaryGenerator
// ---------------------------------------------------------------------------

/// Drives format → prompt → generate → parse, with a single-flight guard on
/// the SOAP entry point.
///
/// ```rust,no_run
/// use soap_scribe::config::AppConfig;
/// use soap_scribe::summary::SummaryGenerator;
/// use soap_scribe::transcript::{PatientInfo, SpeechSegment};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = SummaryGenerator::from_config(&AppConfig::load()?)?;
/// let transcript = vec![
///     SpeechSegment::new("00:00:03", "Doctor", "What brings you in?"),
///     SpeechSegment::new("00:00:06", "Patient", "A sore throat since Friday."),
/// ];
/// let note = generator
///     .generate_summary(&transcript, Some(&PatientInfo::default()))
///     .await?;
/// println!("{note}");
/// # Ok(())
/// # }
/// ```
pub struct SummaryGenerator {
    service: Arc<dyn GenerationService>,
    prompts: PromptBuilder,
    in_flight: InFlight,
}

impl SummaryGenerator {
    pub fn new(service: Arc<dyn GenerationService>, prompts: PromptBuilder) -> Self {
        Self {
            service,
            prompts,
            in_flight: InFlight::new(),
        }
    }

    /// Build a generator backed by [`GeminiClient`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GenerationError> {
        let client = GeminiClient::from_config(&config.generation)?;
        Ok(Self::new(Arc::new(client), PromptBuilder::new(&config.prompt)))
    }

    /// Generate a SOAP note from `transcript`.
    ///
    /// Rejected immediately with [`SummaryError::InProgress`] while an earlier
    /// call on this instance is still running; concurrent callers are turned
    /// away, not queued.  Upstream failures are returned as-is without retry.
    pub async fn generate_summary(
        &self,
        transcript: &[SpeechSegment],
        patient: Option<&PatientInfo>,
    ) -> Result<SoapRecord, SummaryError> {
        if self.in_flight.is_active() {
            log::warn!("summary: rejected, generation already in progress");
            return Err(SummaryError::InProgress);
        }
        if transcript.is_empty() {
            return Err(SummaryError::EmptyTranscript);
        }

        let Some(_guard) = self.in_flight.try_acquire() else {
            log::warn!("summary: rejected, generation already in progress");
            return Err(SummaryError::InProgress);
        };

        log::debug!("summary: formatting {} segments", transcript.len());
        let conversation = format_transcript(transcript);
        let prompt = self.prompts.build_soap_for_today(&conversation, patient);

        let reply = self
            .service
            .generate(&prompt)
            .await
            .inspect_err(|e| log::error!("summary: SOAP generation failed: {e}"))?;

        let note = parse_soap_note(&reply);
        log::info!("summary: SOAP note generated ({} chars reply)", reply.len());
        Ok(note)
    }

    /// Generate a 2–3 sentence summary of `transcript`.
    ///
    /// Does not take the in-flight guard and returns the reply unparsed, so
    /// it may run alongside [`generate_summary`](Self::generate_summary).
    pub async fn generate_quick_summary(
        &self,
        transcript: &[SpeechSegment],
    ) -> Result<String, SummaryError> {
        if transcript.is_empty() {
            return Err(SummaryError::EmptyTranscript);
        }

        let conversation = format_transcript(transcript);
        let prompt = self.prompts.build_quick_summary(&conversation);
        let summary = self.service.generate(&prompt).await?;

        log::info!("summary: quick summary generated ({} chars)", summary.len());
        Ok(summary)
    }

    /// `true` while a `generate_summary` call is running on this instance.
    ///
    /// Advisory: the answer may be stale by the time the next call starts.
    pub fn is_generating(&self) -> bool {
        self.in_flight.is_active()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
