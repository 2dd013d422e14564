//! Plain-text standards coverage summary.
//!
//! The only output ordered by standard code rather than question number.
//! Within a block, question numbers and rigor levels keep aggregation order.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use sherpa_core::{
    DocumentDescriptor, EffectiveAssessment, ExportFormat, StandardsCoverage,
    StandardsCoverageEntry,
};

use crate::artifact::Artifact;
use crate::rows::single_line;

const RULE_WIDTH: usize = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[must_use]
pub fn render(
    document: &DocumentDescriptor,
    items: &[EffectiveAssessment],
    coverage: &StandardsCoverage,
    generated_at: DateTime<Utc>,
) -> Artifact {
    let heavy_rule = "=".repeat(RULE_WIDTH);
    let light_rule = "-".repeat(RULE_WIDTH);
    let overrides = items.iter().filter(|item| item.is_teacher_modified()).count();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Standards Coverage Summary: {}",
        single_line(document.base_name())
    );
    let _ = writeln!(out, "Generated: {}", generated_at.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "{heavy_rule}");
    out.push('\n');
    let _ = writeln!(out, "Total Questions: {}", items.len());
    let _ = writeln!(out, "Standards Addressed: {}", coverage.len());
    if overrides > 0 {
        let _ = writeln!(out, "Teacher Overrides Applied: {overrides}");
    }

    for entry in coverage.sorted_by_code() {
        out.push('\n');
        write_block(&mut out, entry);
        let _ = writeln!(out, "{light_rule}");
    }

    Artifact::new(document, ExportFormat::StandardsSummary, out.into_bytes())
}

/// One block per code. Free text is collapsed to a single line so every block
/// keeps its fixed four-line shape.
fn write_block(out: &mut String, entry: &StandardsCoverageEntry) {
    let code = single_line(entry.code());
    let modified = entry.teacher_modified_count();
    if modified > 0 {
        let _ = writeln!(out, "{code} ({modified} teacher-modified)");
    } else {
        let _ = writeln!(out, "{code}");
    }
    let _ = writeln!(out, "Description: {}", single_line(entry.description()));
    let _ = writeln!(out, "Questions: {}", join(entry.question_numbers()));
    let _ = writeln!(out, "Rigor Levels: {}", join(entry.rigor_levels()));
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
