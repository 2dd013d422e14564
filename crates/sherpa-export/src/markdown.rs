//! Markdown rubric: one GitHub-flavored table, rich tier text.

use std::fmt::Write as _;

use sherpa_core::rubric::TierStyle;
use sherpa_core::{DocumentDescriptor, EffectiveAssessment, ExportFormat};

use crate::artifact::Artifact;
use crate::options::RenderOptions;
use crate::rows::{RUBRIC_HEADERS, rubric_rows, single_line};

/// Line break inside a table cell.
const CELL_BREAK: &str = "<br>";

#[must_use]
pub fn render(
    document: &DocumentDescriptor,
    items: &[EffectiveAssessment],
    options: &RenderOptions,
) -> Artifact {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", single_line(document.base_name()));
    out.push('\n');
    out.push_str("## Rubric\n\n");

    let _ = writeln!(out, "| {} |", RUBRIC_HEADERS.join(" | "));
    let _ = writeln!(
        out,
        "|{}|",
        RUBRIC_HEADERS.map(|h| "-".repeat(h.len() + 2)).join("|")
    );

    for row in rubric_rows(items, TierStyle::Rich, options.question_preview_chars) {
        let criteria = row
            .criteria
            .lines()
            .map(escape_cell)
            .join(CELL_BREAK);
        let tiers = row.tiers.to_vec();
        let cells: Vec<String> = std::iter::once(criteria)
            .chain(tiers.iter().map(|t| escape_cell(t)))
            .collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }

    Artifact::new(document, ExportFormat::RubricMarkdown, out.into_bytes())
}

/// Make free text safe inside a table cell: one line, pipes escaped.
fn escape_cell(text: &str) -> String {
    single_line(text).replace('|', "\\|")
}
