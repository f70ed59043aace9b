//! SOAP scribe — turns a timestamped clinical conversation into a SOAP note.
//!
//! ```text
//! [SpeechSegment] ─▶ format_transcript ─▶ PromptBuilder ─▶ GenerationService
//!                                                               │
//!                          SoapRecord ◀─ parse_soap_note ◀──────┘
//! ```
//!
//! [`summary::SummaryGenerator`] is the entry point; everything else is
//! usable on its own.

pub mod config;
pub mod llm;
pub mod soap;
pub mod summary;
pub mod transcript;
