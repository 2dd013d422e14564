//! Paginated rubric document: the Markdown rubric's table in ASCII-safe form,
//! handed to a [`PaginatedBackend`].

use sherpa_core::rubric::TierStyle;
use sherpa_core::{DocumentDescriptor, EffectiveAssessment, ExportFormat};

use crate::artifact::Artifact;
use crate::error::ExportError;
use crate::options::RenderOptions;
use crate::pdf::PaginatedBackend;
use crate::rows::{RUBRIC_HEADERS, rubric_rows};
use crate::table::{ColumnSpec, HeaderStyle, Orientation, TableDocument};

pub const RUBRIC_SUBTITLE: &str = "Rubric";

/// Describe the rubric as a landscape table with fixed column widths.
#[must_use]
pub fn rubric_document(
    document: &DocumentDescriptor,
    items: &[EffectiveAssessment],
    options: &RenderOptions,
) -> TableDocument {
    let columns = RUBRIC_HEADERS
        .iter()
        .zip(&options.pdf.column_widths)
        .map(|(header, width)| ColumnSpec {
            header: (*header).to_string(),
            width_hint: *width,
        })
        .collect();

    let rows = rubric_rows(items, TierStyle::Plain, options.question_preview_chars)
        .into_iter()
        .map(|row| {
            let mut cells = vec![row.criteria.lines().join("\n")];
            cells.extend(row.tiers.to_vec());
            cells
        })
        .collect();

    TableDocument {
        title: document.base_name().to_string(),
        subtitle: Some(RUBRIC_SUBTITLE.to_string()),
        orientation: Orientation::Landscape,
        columns,
        header_style: HeaderStyle::default(),
        rows,
    }
}

pub fn render(
    document: &DocumentDescriptor,
    items: &[EffectiveAssessment],
    options: &RenderOptions,
    backend: &dyn PaginatedBackend,
) -> Result<Artifact, ExportError> {
    let table = rubric_document(document, items, options);
    let bytes = backend.render(&table)?;
    Ok(Artifact::new(document, ExportFormat::RubricPdf, bytes))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sherpa_core::{AiResult, QuestionResult, RigorLevel, Standard, normalize};

    use super::*;

    #[test]
    fn rubric_table_uses_plain_text() {
        let question = QuestionResult::new(2, "Compare the slopes").with_ai_result(AiResult {
            consensus_standards: Some(vec![Standard::new("8.EE.5", "")]),
            consensus_rigor_level: Some(RigorLevel::Spicy),
            ..AiResult::default()
        });
        let doc = DocumentDescriptor::new("d", "Slopes.pdf");
        let table = rubric_document(&doc, &normalize(&[question]), &RenderOptions::default());

        assert_eq!(table.title, "Slopes");
        assert_eq!(table.subtitle.as_deref(), Some("Rubric"));
        assert_eq!(table.orientation, Orientation::Landscape);
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows[0][0], "Q2: Compare the slopes\n8.EE.5\nSPICY (***)");
        assert!(table.rows[0][1].starts_with("[FULL] "));
        assert!(table.rows.iter().flatten().all(|cell| cell.is_ascii()));
    }

    #[test]
    fn empty_result_set_keeps_header_columns() {
        let doc = DocumentDescriptor::new("d", "Empty.pdf");
        let table = rubric_document(&doc, &[], &RenderOptions::default());

        assert!(table.rows.is_empty());
        let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, RUBRIC_HEADERS.to_vec());
    }
}
