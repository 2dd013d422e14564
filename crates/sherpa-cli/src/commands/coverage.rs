use serde::Serialize;
use sherpa_core::{RigorLevel, StandardsCoverage, aggregate, normalize};
use sherpa_export::ResultSource;

use super::Pipeline;
use crate::cli::GlobalFlags;
use crate::output::output;

/// One standard in the `coverage` listing.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub code: String,
    pub description: String,
    pub questions: usize,
    pub highest_rigor: RigorLevel,
    pub teacher_modified: usize,
}

/// Coverage rows ordered by standard code.
#[must_use]
pub fn coverage_rows(coverage: &StandardsCoverage) -> Vec<CoverageRow> {
    coverage
        .sorted_by_code()
        .into_iter()
        .map(|entry| CoverageRow {
            code: entry.code().to_string(),
            description: entry.description().to_string(),
            questions: entry.occurrences(),
            highest_rigor: entry.highest_rigor(),
            teacher_modified: entry.teacher_modified_count(),
        })
        .collect()
}

pub async fn run(document_id: &str, pipeline: &Pipeline, flags: &GlobalFlags) -> anyhow::Result<()> {
    let results = pipeline.source.fetch(document_id).await?;
    let items = normalize(&results.results);
    let rows = coverage_rows(&aggregate(&items));
    tracing::debug!(document = document_id, standards = rows.len(), "computed coverage");
    output(&rows, flags.output)
}
