//! SOAP-note prompting and reply parsing.
//!
//! * [`PromptBuilder`] — SOAP and quick-summary prompts.
//! * [`parse_soap_note`] — label-bounded extraction into a [`SoapRecord`].
//! * [`SoapSection`] — the four labels in document order.

pub mod parser;
pub mod prompt;
pub mod record;

pub use parser::parse_soap_note;
pub use prompt::{PromptBuilder, NOT_DOCUMENTED};
pub use record::{SoapRecord, SoapSection};
