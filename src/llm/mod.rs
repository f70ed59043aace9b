//! Generation-service boundary for the SOAP scribe.
//!
//! * [`GenerationService`] — async prompt → text trait; the only suspension
//!   point in the pipeline.
//! * [`GeminiClient`] — Google Gemini `generateContent` implementation.
//! * [`GenerationError`] — transport, API and empty-result failures.

pub mod gemini;
pub mod service;

pub use gemini::{GeminiClient, SAFETY_CATEGORIES};
pub use service::{GenerationError, GenerationService};
