//! Extracts SOAP sections from free-text model output.
//!
//! Each section starts right after the first case-insensitive occurrence of
//! its label (an optional colon and any whitespace are skipped) and runs up
//! to the first following occurrence of the *next* label plus a colon, or to
//! the end of the reply.  Labels are matched anywhere in the text, not only
//! at line starts, so a prose mention such as `"follow the plan: rest"` can
//! end the assessment early.  Missing labels leave their field empty.
//!
//! If nothing at all is extracted the whole reply, untouched, becomes the
//! `subjective` field so no generated text is lost.

use std::sync::LazyLock;

use regex::Regex;

use super::record::{SoapRecord, SoapSection};

/// `LABEL:?\s*` per section, indexed like [`SoapSection::ALL`].
static SECTION_START: LazyLock<[Regex; 4]> =
    LazyLock::new(|| SoapSection::ALL.map(|s| label_regex(s, r":?\s*")));

/// `LABEL:` per section; marks where the previous section ends.
static SECTION_END: LazyLock<[Regex; 4]> =
    LazyLock::new(|| SoapSection::ALL.map(|s| label_regex(s, ":")));

/// The label folds ASCII case only, so `ſ` (U+017F) never stands in for `s`.
fn label_regex(section: SoapSection, suffix: &str) -> Regex {
    // Labels are fixed ASCII words, so the pattern is always valid.
    Regex::new(&format!("(?i-u:{}){suffix}", section.label())).expect("static SOAP label pattern")
}

/// Parse a generated reply into a [`SoapRecord`].  Never fails.
///
/// ```rust
/// use soap_scribe::soap::parse_soap_note;
///
/// let note = parse_soap_note("SUBJECTIVE: A\nOBJECTIVE: B\nASSESSMENT: C\nPLAN: D");
/// assert_eq!(note.objective, "B");
///
/// let fallback = parse_soap_note("patient seems fine");
/// assert_eq!(fallback.subjective, "patient seems fine");
/// ```
pub fn parse_soap_note(text: &str) -> SoapRecord {
    let mut record = SoapRecord::default();

    for section in SoapSection::ALL {
        if let Some(content) = extract_section(text, section) {
            record.set(section, content.trim().to_string());
        }
    }

    if record.is_empty() {
        log::warn!(
            "soap: no section labels recognised, keeping whole reply as subjective (len={})",
            text.len()
        );
        record.subjective = text.to_string();
    }

    record
}

/// Raw (untrimmed) content of `section`, or `None` when its label is absent.
fn extract_section(text: &str, section: SoapSection) -> Option<&str> {
    let start = SECTION_START[section as usize].find(text)?.end();
    let rest = &text[start..];

    let end = section
        .next()
        .and_then(|next| SECTION_END[next as usize].find(rest))
        .map_or(rest.len(), |m| m.start());

    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(s: &str, o: &str, a: &str, p: &str) -> SoapRecord {
        SoapRecord {
            subjective: s.into(),
            objective: o.into(),
            assessment: a.into(),
            plan: p.into(),
        }
    }

    #[test]
    fn well_formed_reply_fills_all_sections() {
        let note = parse_soap_note("SUBJECTIVE: A\nOBJECTIVE: B\nASSESSMENT: C\nPLAN: D");
        assert_eq!(note, record("A", "B", "C", "D"));
    }

    #[test]
    fn multiline_sections_are_trimmed() {
        let reply = "\
SUBJECTIVE:
Patient reports a dry cough for two weeks.
Denies fever.

OBJECTIVE:
Not documented in this visit

ASSESSMENT:
Likely post-viral cough.

PLAN:
Honey and fluids.
Return if symptoms worsen.
";
        let note = parse_soap_note(reply);
        assert_eq!(
            note.subjective,
            "Patient reports a dry cough for two weeks.\nDenies fever."
        );
        assert_eq!(note.objective, "Not documented in this visit");
        assert_eq!(note.assessment, "Likely post-viral cough.");
        assert_eq!(note.plan, "Honey and fluids.\nReturn if symptoms worsen.");
    }

    #[test]
    fn only_plan_present() {
        assert_eq!(parse_soap_note("PLAN: done"), record("", "", "", "done"));
    }

    #[test]
    fn no_labels_falls_back_to_whole_reply() {
        assert_eq!(
            parse_soap_note("patient seems fine"),
            record("patient seems fine", "", "", "")
        );
    }

    #[test]
    fn fallback_keeps_reply_untrimmed() {
        let reply = "  \nThe model ignored the format.\n  ";
        let note = parse_soap_note(reply);
        assert_eq!(note.subjective, reply);
        assert!(note.objective.is_empty());
    }

    #[test]
    fn labels_match_case_insensitively() {
        let note = parse_soap_note("Subjective: a\nobjective: b\nAssessment: c\nplan: d");
        assert_eq!(note, record("a", "b", "c", "d"));
    }

    #[test]
    fn colon_after_label_is_optional() {
        let note = parse_soap_note("SUBJECTIVE\nheadache\nOBJECTIVE: BP 120/80");
        assert_eq!(note.subjective, "headache");
        assert_eq!(note.objective, "BP 120/80");
    }

    #[test]
    fn section_without_following_label_runs_to_end() {
        // No "ASSESSMENT:" after objective, so objective swallows the rest.
        let note = parse_soap_note("SUBJECTIVE: s\nOBJECTIVE: o\nPLAN: p");
        assert_eq!(note.subjective, "s");
        assert_eq!(note.objective, "o\nPLAN: p");
        assert_eq!(note.assessment, "");
        assert_eq!(note.plan, "p");
    }

    #[test]
    fn markdown_bold_labels_still_split() {
        let note = parse_soap_note("**SUBJECTIVE:** cough\n**OBJECTIVE:** clear lungs");
        assert_eq!(note.subjective, "** cough\n**");
        assert_eq!(note.objective, "** clear lungs");
    }

    #[test]
    fn label_word_inside_prose_is_a_boundary() {
        // "plan:" in the assessment prose is the first PLAN occurrence.
        let note = parse_soap_note(
            "SUBJECTIVE: s\nOBJECTIVE: o\nASSESSMENT: discussed the plan: rest\nPLAN: fluids",
        );
        assert_eq!(note.assessment, "discussed the");
        assert_eq!(note.plan, "rest\nPLAN: fluids");
    }

    #[test]
    fn bare_label_word_starts_but_does_not_end_a_section() {
        // Ends need "OBJECTIVE:", starts accept the bare word.
        let note = parse_soap_note("SUBJECTIVE: wants an objective opinion\nOBJECTIVE: none");
        assert_eq!(note.subjective, "wants an objective opinion");
        assert_eq!(note.objective, "opinion\nOBJECTIVE: none");
    }

    #[test]
    fn long_s_is_not_folded_into_a_label() {
        let reply = "\u{17f}ubjective: a\nOBJECTIVE: b";
        let note = parse_soap_note(reply);
        assert_eq!(note.subjective, "");
        assert_eq!(note.objective, "b");

        let note = parse_soap_note("a\u{17f}\u{17f}e\u{17f}\u{17f}ment: x");
        assert_eq!(note, record("a\u{17f}\u{17f}e\u{17f}\u{17f}ment: x", "", "", ""));
    }

    #[test]
    fn unicode_whitespace_after_label_is_skipped() {
        let note = parse_soap_note("PLAN:\u{a0}rest");
        assert_eq!(note.plan, "rest");
    }

    #[test]
    fn empty_reply_falls_back_to_empty_subjective() {
        assert_eq!(parse_soap_note(""), SoapRecord::default());
    }
}
