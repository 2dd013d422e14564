//! Rigor levels, assessment sources, and export formats.
//!
//! All enums serialize with the lowercase names used on the wire. Parsing from
//! free-form strings goes through `FromStr` and fails with [`CoreError`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RigorLevel
// ---------------------------------------------------------------------------

/// Cognitive-demand classification of a question.
///
/// Totally ordered by [`RigorLevel::rank`]:
///
/// ```text
/// mild (DOK 1-2) < medium (DOK 2-3) < spicy (DOK 3-4)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RigorLevel {
    #[default]
    Mild,
    Medium,
    Spicy,
}

impl RigorLevel {
    pub const ALL: [Self; 3] = [Self::Mild, Self::Medium, Self::Spicy];

    /// Position in the rigor order. Comparisons go through this, never through
    /// the string form.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Mild => 1,
            Self::Medium => 2,
            Self::Spicy => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Spicy => "spicy",
        }
    }

    /// Upper-case label used by the plain-text renderings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "MILD",
            Self::Medium => "MEDIUM",
            Self::Spicy => "SPICY",
        }
    }

    /// Depth-of-Knowledge band reported for this level.
    #[must_use]
    pub const fn dok_band(self) -> &'static str {
        match self {
            Self::Mild => "DOK 1-2",
            Self::Medium => "DOK 2-3",
            Self::Spicy => "DOK 3-4",
        }
    }
}

impl PartialOrd for RigorLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RigorLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for RigorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RigorLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "medium" => Ok(Self::Medium),
            "spicy" => Ok(Self::Spicy),
            _ => Err(CoreError::UnknownRigorLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// AssessmentSource
// ---------------------------------------------------------------------------

/// Where a question's effective values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    /// A teacher override was present. Dominates everything else.
    Teacher,
    /// Only the AI consensus result was present.
    Ai,
    /// Neither was present; all values are defaults.
    Default,
}

impl AssessmentSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Ai => "ai",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub const fn is_teacher(self) -> bool {
        matches!(self, Self::Teacher)
    }

    /// Attribution shown in tabular exports.
    #[must_use]
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Teacher => "Teacher Override",
            Self::Ai | Self::Default => "Standards Sherpa",
        }
    }
}

impl fmt::Display for AssessmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// The four export artifacts. Each maps 1:1 to one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    RubricMarkdown,
    RubricPdf,
    Csv,
    StandardsSummary,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [
        Self::RubricMarkdown,
        Self::RubricPdf,
        Self::Csv,
        Self::StandardsSummary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RubricMarkdown => "rubric-markdown",
            Self::RubricPdf => "rubric-pdf",
            Self::Csv => "csv",
            Self::StandardsSummary => "standards-summary",
        }
    }

    /// Suffix appended to the document's base name.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::RubricMarkdown => "_rubric",
            Self::RubricPdf => "_rubric",
            Self::Csv => "_analysis",
            Self::StandardsSummary => "_standards_summary",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::RubricMarkdown => "md",
            Self::RubricPdf => "pdf",
            Self::Csv => "csv",
            Self::StandardsSummary => "txt",
        }
    }

    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::RubricMarkdown => "text/markdown",
            Self::RubricPdf => "application/pdf",
            Self::Csv => "text/csv",
            Self::StandardsSummary => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownExportFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigor_order_follows_rank() {
        assert!(RigorLevel::Mild < RigorLevel::Medium);
        assert!(RigorLevel::Medium < RigorLevel::Spicy);
        assert_eq!(RigorLevel::ALL.iter().max(), Some(&RigorLevel::Spicy));
    }

    #[test]
    fn rigor_parses_case_insensitively() {
        assert_eq!("Spicy".parse::<RigorLevel>().unwrap(), RigorLevel::Spicy);
        assert_eq!(" medium ".parse::<RigorLevel>().unwrap(), RigorLevel::Medium);
        assert!(matches!(
            "hot".parse::<RigorLevel>(),
            Err(CoreError::UnknownRigorLevel(value)) if value == "hot"
        ));
    }

    #[test]
    fn rigor_serializes_lowercase() {
        let json = serde_json::to_string(&RigorLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn default_source_is_attributed_to_sherpa() {
        assert_eq!(AssessmentSource::Default.attribution(), "Standards Sherpa");
        assert_eq!(AssessmentSource::Ai.attribution(), "Standards Sherpa");
        assert_eq!(AssessmentSource::Teacher.attribution(), "Teacher Override");
    }

    #[test]
    fn export_format_wire_names_roundtrip() {
        for format in ExportFormat::ALL {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.as_str()));
        }
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
