//! The structured SOAP note returned to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SoapSection
// ---------------------------------------------------------------------------

/// The four SOAP sections, in the order the model is asked to emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoapSection {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SoapSection {
    /// All sections in document order.
    pub const ALL: [SoapSection; 4] = [
        SoapSection::Subjective,
        SoapSection::Objective,
        SoapSection::Assessment,
        SoapSection::Plan,
    ];

    /// The uppercase label that introduces this section in model output.
    pub fn label(self) -> &'static str {
        match self {
            SoapSection::Subjective => "SUBJECTIVE",
            SoapSection::Objective => "OBJECTIVE",
            SoapSection::Assessment => "ASSESSMENT",
            SoapSection::Plan => "PLAN",
        }
    }

    /// The section that follows this one, or `None` for [`SoapSection::Plan`].
    pub fn next(self) -> Option<SoapSection> {
        match self {
            SoapSection::Subjective => Some(SoapSection::Objective),
            SoapSection::Objective => Some(SoapSection::Assessment),
            SoapSection::Assessment => Some(SoapSection::Plan),
            SoapSection::Plan => None,
        }
    }
}

impl fmt::Display for SoapSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// SoapRecord
// ---------------------------------------------------------------------------

/// A SOAP note extracted from a generated reply.
///
/// Fields are independent strings; missing sections are empty.  When the
/// reply carried no recognisable labels at all, `subjective` holds the whole
/// reply and the other three are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapRecord {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

impl SoapRecord {
    pub fn get(&self, section: SoapSection) -> &str {
        match section {
            SoapSection::Subjective => &self.subjective,
            SoapSection::Objective => &self.objective,
            SoapSection::Assessment => &self.assessment,
            SoapSection::Plan => &self.plan,
        }
    }

    fn slot_mut(&mut self, section: SoapSection) -> &mut String {
        match section {
            SoapSection::Subjective => &mut self.subjective,
            SoapSection::Objective => &mut self.objective,
            SoapSection::Assessment => &mut self.assessment,
            SoapSection::Plan => &mut self.plan,
        }
    }

    pub(crate) fn set(&mut self, section: SoapSection, content: String) {
        *self.slot_mut(section) = content;
    }

    /// `(section, content)` pairs in document order.
    pub fn sections(&self) -> impl Iterator<Item = (SoapSection, &str)> + '_ {
        SoapSection::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// `true` when every section is empty.
    pub fn is_empty(&self) -> bool {
        self.sections().all(|(_, content)| content.is_empty())
    }
}

impl fmt::Display for SoapRecord {
    /// Renders `LABEL:\ncontent` blocks separated by blank lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (section, content)) in self.sections().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}:\n{}", section.label(), content)?;
        }
        Ok(())
    }
}
