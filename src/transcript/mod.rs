//! Conversation transcript types and prompt-ready formatting.
//!
//! * [`SpeechSegment`] — one timestamped utterance from one speaker.
//! * [`PatientInfo`] — optional patient metadata shown in SOAP prompts.
//! * [`format_transcript`] — renders segments as `[timestamp] speaker: text`
//!   lines.

pub mod format;
pub mod segment;

pub use format::format_transcript;
pub use segment::{PatientInfo, SpeechSegment, NOT_PROVIDED};
