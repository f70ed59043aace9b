//! Prompt builder for SOAP-note and quick-summary generation.
//!
//! [`PromptBuilder`] constructs two kinds of prompts:
//! * **SOAP** (`build_soap`) — role instruction, patient header, transcript,
//!   and a strict output-format block the parser relies on.
//! * **Quick summary** (`build_quick_summary`) — transcript plus a request
//!   for a 2–3 sentence overview.  The reply is used as-is.

use chrono::NaiveDate;

use crate::config::PromptConfig;
use crate::transcript::PatientInfo;

use super::record::SoapSection;

// ---------------------------------------------------------------------------
// Instructions
// ---------------------------------------------------------------------------

const SOAP_ROLE_INSTRUCTION: &str = "\
You are a medical documentation assistant. Using the doctor-patient conversation below, \
write a SOAP note (Subjective, Objective, Assessment, Plan) in professional clinical format.";

/// Placeholder the model is told to use for sections with no support.
pub const NOT_DOCUMENTED: &str = "Not documented in this visit";

const SOAP_RULES: &str = "\
**Instructions:**
1. Pull the clinically relevant information out of the conversation
2. Arrange it into SOAP sections:
   - **SUBJECTIVE**: symptoms, complaints and history as the patient describes them
   - **OBJECTIVE**: observable findings, vital signs mentioned, physical exam results
   - **ASSESSMENT**: clinical impression, diagnoses, problems identified
   - **PLAN**: treatment, follow-up, prescriptions, referrals
3. Use professional medical terminology
4. Be concise but complete
5. Include only information explicitly stated in the conversation; do not infer beyond it";

const QUICK_SUMMARY_INSTRUCTION: &str = "\
Summarize this doctor-patient conversation in 2-3 sentences, focusing on the chief complaint \
and main points:";

const QUICK_SUMMARY_CLOSING: &str = "Provide a brief, professional medical summary.";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds generation prompts from formatted transcript text.
///
/// ```rust
/// use chrono::NaiveDate;
/// use soap_scribe::soap::PromptBuilder;
///
/// let builder = PromptBuilder::default();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// let prompt = builder.build_soap("[00:01] Doctor: Hello", None, date);
/// assert!(prompt.contains("- Name: Not provided"));
/// assert!(prompt.contains("- Date: 3/9/2026"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    date_format: String,
}

impl PromptBuilder {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
        }
    }

    /// Build the full SOAP prompt for a visit on `date`.
    ///
    /// Structure (in order):
    /// 1. Role instruction
    /// 2. Patient header (name, MRN, date)
    /// 3. Transcript, verbatim
    /// 4. Numbered rules, including the "not documented" placeholder
    /// 5. Exact response layout with `SUBJECTIVE:` … `PLAN:` labels
    pub fn build_soap(
        &self,
        conversation: &str,
        patient: Option<&PatientInfo>,
        date: NaiveDate,
    ) -> String {
        let anonymous = PatientInfo::default();
        let patient = patient.unwrap_or(&anonymous);

        let mut prompt = String::with_capacity(conversation.len() + 2048);
        prompt.push_str(SOAP_ROLE_INSTRUCTION);

        prompt.push_str("\n\n**Patient Information:**\n");
        prompt.push_str(&format!("- Name: {}\n", patient.display_name()));
        prompt.push_str(&format!("- MRN: {}\n", patient.display_mrn()));
        prompt.push_str(&format!("- Date: {}\n", date.format(&self.date_format)));

        prompt.push_str("\n**Conversation Transcript:**\n");
        prompt.push_str(conversation);

        prompt.push_str("\n\n");
        prompt.push_str(SOAP_RULES);
        prompt.push_str(&format!(
            "\n6. If a section has no relevant information, write \"{NOT_DOCUMENTED}\"\n"
        ));

        prompt.push_str("\n**Format your response exactly as:**\n");
        prompt.push_str(&response_layout());

        prompt
    }

    /// Build the SOAP prompt dated with the local current date.
    pub fn build_soap_for_today(&self, conversation: &str, patient: Option<&PatientInfo>) -> String {
        self.build_soap(conversation, patient, chrono::Local::now().date_naive())
    }

    /// Build the short-summary prompt.
    pub fn build_quick_summary(&self, conversation: &str) -> String {
        format!("{QUICK_SUMMARY_INSTRUCTION}\n\n{conversation}\n\n{QUICK_SUMMARY_CLOSING}")
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(&PromptConfig::default())
    }
}

/// `LABEL:\n[placeholder]` blocks in parser order.
fn response_layout() -> String {
    SoapSection::ALL
        .iter()
        .map(|s| format!("\n{}:\n[Your {} here]\n", s.label(), s.label().to_lowercase()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CONVERSATION: &str =
        "[00:00:02] Doctor: What brings you in?\n[00:00:05] Patient: Chest tightness since Monday.";

    fn visit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn soap_prompt_names_the_task() {
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        assert!(prompt.starts_with("You are a medical documentation assistant."));
        assert!(prompt.contains("SOAP note"));
    }

    #[test]
    fn missing_patient_renders_not_provided() {
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        assert!(prompt.contains("- Name: Not provided\n"));
        assert!(prompt.contains("- MRN: Not provided\n"));
    }

    #[test]
    fn partial_patient_info_fills_only_missing_fields() {
        let patient = PatientInfo {
            name: Some("Maria Lopez".into()),
            mrn: None,
        };
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, Some(&patient), visit_date());
        assert!(prompt.contains("- Name: Maria Lopez\n"));
        assert!(prompt.contains("- MRN: Not provided\n"));
    }

    #[test]
    fn date_uses_configured_format() {
        let us = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        assert!(us.contains("- Date: 10/14/2026\n"));

        let iso = PromptBuilder::new(&PromptConfig {
            date_format: "%Y-%m-%d".into(),
        })
        .build_soap(CONVERSATION, None, visit_date());
        assert!(iso.contains("- Date: 2026-10-14\n"));
    }

    #[test]
    fn transcript_is_embedded_verbatim() {
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        assert!(prompt.contains(&format!("**Conversation Transcript:**\n{CONVERSATION}\n")));
    }

    #[test]
    fn format_block_lists_labels_in_parser_order() {
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        let (_, layout) = prompt
            .split_once("**Format your response exactly as:**")
            .expect("format block");

        let positions: Vec<usize> = SoapSection::ALL
            .iter()
            .map(|s| layout.find(&format!("{}:\n", s.label())).expect("label present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(layout.trim_end().ends_with("[Your plan here]"));
    }

    #[test]
    fn rules_cover_placeholder_and_grounding() {
        let prompt = PromptBuilder::default().build_soap(CONVERSATION, None, visit_date());
        assert!(prompt.contains("write \"Not documented in this visit\""));
        assert!(prompt.contains("only information explicitly stated"));
    }

    #[test]
    fn quick_summary_prompt_wraps_transcript() {
        let prompt = PromptBuilder::default().build_quick_summary(CONVERSATION);
        assert!(prompt.contains("2-3 sentences"));
        assert!(prompt.contains("chief complaint"));
        assert!(prompt.contains(&format!("\n\n{CONVERSATION}\n\n")));
        assert!(prompt.ends_with("Provide a brief, professional medical summary."));
        assert!(!prompt.contains("Not provided"));
    }
}
