//! Summary orchestration: the caller-facing entry points.
//!
//! ```text
//! generate_summary(transcript, patient)
//!   ├─ in flight?        → SummaryError::InProgress
//!   ├─ empty transcript? → SummaryError::EmptyTranscript
//!   └─ acquire guard
//!        format_transcript → PromptBuilder::build_soap
//!          → GenerationService::generate → parse_soap_note
//!      guard dropped on every exit path
//!
//! generate_quick_summary(transcript)   (no guard, no parsing)
//! ```
//!
//! One [`SummaryGenerator`] is one single-flight domain: create one per
//! session rather than sharing a process-wide instance.

pub mod generator;
pub mod guard;

pub use generator::{SummaryError, SummaryGenerator};
pub use guard::{InFlight, InFlightGuard};
