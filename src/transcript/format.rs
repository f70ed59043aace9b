//! Renders a transcript as prompt-ready conversational text.

use super::SpeechSegment;

/// Render `segments` as one `[timestamp] speaker: text` line per segment,
/// joined with `\n`.
///
/// Order and content are preserved verbatim: no trimming, deduplication or
/// truncation.  Callers reject empty transcripts before formatting.
///
/// ```rust
/// use soap_scribe::transcript::{format_transcript, SpeechSegment};
///
/// let text = format_transcript(&[
///     SpeechSegment::new("00:01", "Doctor", "How are you feeling?"),
///     SpeechSegment::new("00:04", "Patient", "Tired."),
/// ]);
/// assert_eq!(text, "[00:01] Doctor: How are you feeling?\n[00:04] Patient: Tired.");
/// ```
pub fn format_transcript(segments: &[SpeechSegment]) -> String {
    segments
        .iter()
        .map(|s| format!("[{}] {}: {}", s.timestamp, s.speaker, s.text))
        .collect::<Vec<_>>()
        .join("\n")
}
