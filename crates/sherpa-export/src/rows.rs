//! Logical rubric rows shared by the Markdown and paginated renderers.
//!
//! Both renderers show the same table. They differ only in tier style and in
//! how the three criteria lines are joined.

use sherpa_core::EffectiveAssessment;
use sherpa_core::rubric::{self, CreditTier, CreditTiers, TierStyle};

/// Column headings of the rubric table.
pub const RUBRIC_HEADERS: [&str; 5] = [
    "Criteria",
    CreditTier::Full.heading(),
    CreditTier::Partial.heading(),
    CreditTier::Minimal.heading(),
    CreditTier::None.heading(),
];

/// Three pieces of information packed into the criteria cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// `Q{n}: {question text, truncated}`
    pub question: String,
    /// Primary standard code or `No Standard`.
    pub standard: String,
    /// Rigor indicator in the row's style.
    pub rigor: String,
}

impl Criteria {
    #[must_use]
    pub fn lines(&self) -> [&str; 3] {
        [&self.question, &self.standard, &self.rigor]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricRow {
    pub criteria: Criteria,
    pub tiers: CreditTiers,
}

/// Build one row per item, in the items' order.
#[must_use]
pub fn rubric_rows(
    items: &[EffectiveAssessment],
    style: TierStyle,
    preview_chars: usize,
) -> Vec<RubricRow> {
    items
        .iter()
        .map(|item| RubricRow {
            criteria: Criteria {
                question: format!(
                    "Q{}: {}",
                    item.question_number,
                    truncate_text(&item.question_text, preview_chars)
                ),
                standard: item.primary_standard_label().to_string(),
                rigor: rubric::rigor_indicator(item.effective_rigor, style),
            },
            tiers: rubric::tiers(item.effective_rigor, style),
        })
        .collect()
}

/// Keep the first `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        text.chars().take(max_chars).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

/// Join the lines of `text` with single spaces, dropping empty ones.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
