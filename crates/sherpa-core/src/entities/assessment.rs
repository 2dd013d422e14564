use serde::{Serialize, Serializer};
use std::fmt;

use super::Standard;
use crate::enums::{AssessmentSource, RigorLevel};

/// Label rendered in place of a primary standard when a question has none.
pub const NO_STANDARD_LABEL: &str = "No Standard";

/// Confidence attached to an effective assessment.
///
/// Serializes as a bare number, or as the literal string `"N/A"` when neither
/// the override nor the AI result carried one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Confidence {
    Score(f64),
    #[default]
    NotAvailable,
}

impl Confidence {
    pub const NOT_AVAILABLE: &'static str = "N/A";

    #[must_use]
    pub const fn score(self) -> Option<f64> {
        match self {
            Self::Score(value) => Some(value),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<f64>> for Confidence {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotAvailable, Self::Score)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(value) => write!(f, "{value}"),
            Self::NotAvailable => f.write_str(Self::NOT_AVAILABLE),
        }
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str(Self::NOT_AVAILABLE),
        }
    }
}

/// The resolved, post-override view of one question.
///
/// Built fresh for every export and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveAssessment {
    pub question_number: u32,
    pub question_text: String,
    pub effective_standards: Vec<Standard>,
    pub effective_rigor: RigorLevel,
    pub source: AssessmentSource,
    pub confidence: Confidence,
    pub justification: String,
}

impl EffectiveAssessment {
    /// First effective standard, if any.
    #[must_use]
    pub fn primary_standard(&self) -> Option<&Standard> {
        self.effective_standards.first()
    }

    /// Short label for compact renderings: the primary standard's code, or
    /// [`NO_STANDARD_LABEL`] when there is none or its code is blank.
    #[must_use]
    pub fn primary_standard_label(&self) -> &str {
        self.primary_standard()
            .filter(|standard| standard.has_code())
            .map_or(NO_STANDARD_LABEL, |standard| standard.code.as_str())
    }

    #[must_use]
    pub const fn is_teacher_modified(&self) -> bool {
        self.source.is_teacher()
    }
}
