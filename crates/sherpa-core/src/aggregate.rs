//! Standards coverage aggregation.
//!
//! Groups a normalized result set by standard code. Entries are held in an
//! insertion-ordered map: iteration follows first appearance in question
//! order, and alphabetical output is an explicit, separate sort
//! ([`StandardsCoverage::sorted_by_code`]).
//!
//! Standards with a blank code are skipped here. They still appear in each
//! question's effective standards for row-level renderings.

use indexmap::IndexMap;
use serde::Serialize;

use crate::entities::{EffectiveAssessment, Standard};
use crate::enums::RigorLevel;

/// Every occurrence of one standard code across a result set.
///
/// `question_numbers`, `rigor_levels`, and `override_flags` are index-aligned:
/// position `i` in each describes the same occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsCoverageEntry {
    code: String,
    description: String,
    question_numbers: Vec<u32>,
    rigor_levels: Vec<RigorLevel>,
    override_flags: Vec<bool>,
}

impl StandardsCoverageEntry {
    fn new(standard: &Standard) -> Self {
        Self {
            code: standard.code.clone(),
            description: standard.description.clone(),
            question_numbers: Vec::new(),
            rigor_levels: Vec::new(),
            override_flags: Vec::new(),
        }
    }

    fn record(&mut self, standard: &Standard, item: &EffectiveAssessment) {
        if self.description.is_empty() && !standard.description.is_empty() {
            self.description.clone_from(&standard.description);
        }
        self.question_numbers.push(item.question_number);
        self.rigor_levels.push(item.effective_rigor);
        self.override_flags.push(item.is_teacher_modified());
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn question_numbers(&self) -> &[u32] {
        &self.question_numbers
    }

    #[must_use]
    pub fn rigor_levels(&self) -> &[RigorLevel] {
        &self.rigor_levels
    }

    #[must_use]
    pub fn override_flags(&self) -> &[bool] {
        &self.override_flags
    }

    #[must_use]
    pub fn occurrences(&self) -> usize {
        self.question_numbers.len()
    }

    /// Number of occurrences that came from a teacher override.
    #[must_use]
    pub fn teacher_modified_count(&self) -> usize {
        self.override_flags.iter().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn highest_rigor(&self) -> RigorLevel {
        highest_rigor(self)
    }
}

/// Highest rigor recorded for an entry.
///
/// Left fold over the recorded levels; on ties the first-seen maximum is kept.
#[must_use]
pub fn highest_rigor(entry: &StandardsCoverageEntry) -> RigorLevel {
    entry
        .rigor_levels
        .iter()
        .copied()
        .fold(None, |best: Option<RigorLevel>, level| match best {
            Some(current) if level <= current => Some(current),
            _ => Some(level),
        })
        .unwrap_or_default()
}

/// Coverage entries keyed by standard code, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardsCoverage {
    entries: IndexMap<String, StandardsCoverageEntry>,
}

impl StandardsCoverage {
    /// Number of distinct standard codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&StandardsCoverageEntry> {
        self.entries.get(code)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &StandardsCoverageEntry> {
        self.entries.values()
    }

    /// Entries ordered lexicographically by code.
    #[must_use]
    pub fn sorted_by_code(&self) -> Vec<&StandardsCoverageEntry> {
        let mut entries: Vec<&StandardsCoverageEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries
    }
}

/// Group `items` by standard code, preserving their order within each entry.
#[must_use]
pub fn aggregate(items: &[EffectiveAssessment]) -> StandardsCoverage {
    let mut entries: IndexMap<String, StandardsCoverageEntry> = IndexMap::new();

    for item in items {
        for standard in &item.effective_standards {
            if !standard.has_code() {
                tracing::trace!(
                    question = item.question_number,
                    "skipping standard without a code"
                );
                continue;
            }
            entries
                .entry(standard.code.clone())
                .or_insert_with(|| StandardsCoverageEntry::new(standard))
                .record(standard, item);
        }
    }

    StandardsCoverage { entries }
}
