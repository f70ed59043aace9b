//! Transcript segment and patient metadata types.

use serde::{Deserialize, Serialize};

/// Placeholder rendered for any patient field the caller did not supply.
pub const NOT_PROVIDED: &str = "Not provided";

/// A single utterance in a recorded conversation.
///
/// The timestamp is an opaque display string (e.g. `"00:01:12"`); it is
/// never parsed, only echoed into the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechSegment {
    pub timestamp: String,
    pub speaker: String,
    pub text: String,
}

impl SpeechSegment {
    pub fn new(
        timestamp: impl Into<String>,
        speaker: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Optional patient metadata embedded in the SOAP prompt header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    #[serde(default)]
    pub name: Option<String>,
    /// Medical record number.
    #[serde(default)]
    pub mrn: Option<String>,
}

impl PatientInfo {
    /// Name for display, or [`NOT_PROVIDED`] when absent or empty.
    pub fn display_name(&self) -> &str {
        display_or_placeholder(self.name.as_deref())
    }

    /// MRN for display, or [`NOT_PROVIDED`] when absent or empty.
    pub fn display_mrn(&self) -> &str {
        display_or_placeholder(self.mrn.as_deref())
    }
}

fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_PROVIDED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_placeholder() {
        let info = PatientInfo::default();
        assert_eq!(info.display_name(), NOT_PROVIDED);
        assert_eq!(info.display_mrn(), NOT_PROVIDED);
    }

    #[test]
    fn empty_strings_use_placeholder() {
        let info = PatientInfo {
            name: Some(String::new()),
            mrn: Some("MRN-001".into()),
        };
        assert_eq!(info.display_name(), NOT_PROVIDED);
        assert_eq!(info.display_mrn(), "MRN-001");
    }

    #[test]
    fn segment_deserialises_from_json() {
        let seg: SpeechSegment = serde_json::from_value(serde_json::json!({
            "timestamp": "00:00:05",
            "speaker": "Doctor",
            "text": "What brings you in today?"
        }))
        .unwrap();
        assert_eq!(seg, SpeechSegment::new("00:00:05", "Doctor", "What brings you in today?"));
    }

    #[test]
    fn patient_info_tolerates_missing_keys() {
        let info: PatientInfo =
            serde_json::from_value(serde_json::json!({ "name": "Jane Doe" })).unwrap();
        assert_eq!(info.display_name(), "Jane Doe");
        assert_eq!(info.display_mrn(), NOT_PROVIDED);
    }
}
