//! Flat data export: one CSV row per question.
//!
//! Quoting follows RFC 4180: a field containing a quote, comma, or line break
//! is wrapped in quotes with embedded quotes doubled. Rows end with `\n`.

use sherpa_core::{DocumentDescriptor, EffectiveAssessment, ExportFormat};

use crate::artifact::Artifact;

pub const CSV_HEADERS: [&str; 8] = [
    "Question Number",
    "Question Text",
    "Standards",
    "Rigor Level",
    "DOK Level",
    "Source",
    "Confidence",
    "Justification",
];

/// Separator between multiple standard codes in one cell.
pub const STANDARDS_SEPARATOR: &str = "; ";

#[must_use]
pub fn render(document: &DocumentDescriptor, items: &[EffectiveAssessment]) -> Artifact {
    let mut out = String::new();
    push_record(&mut out, CSV_HEADERS.iter().map(|h| (*h).to_string()));

    for item in items {
        push_record(&mut out, record(item).into_iter());
    }

    Artifact::new(document, ExportFormat::Csv, out.into_bytes())
}

fn record(item: &EffectiveAssessment) -> [String; 8] {
    [
        item.question_number.to_string(),
        item.question_text.clone(),
        item.effective_standards
            .iter()
            .map(|standard| standard.code.as_str())
            .collect::<Vec<_>>()
            .join(STANDARDS_SEPARATOR),
        item.effective_rigor.as_str().to_string(),
        item.effective_rigor.dok_band().to_string(),
        item.source.attribution().to_string(),
        item.confidence.to_string(),
        item.justification.clone(),
    ]
}

fn push_record(out: &mut String, fields: impl Iterator<Item = String>) {
    let line = fields.map(|f| escape_field(&f)).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Quote a field when it holds a quote, delimiter, or line break.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_fields_are_untouched() {
        assert_eq!(escape_field("7.EE.1"), "7.EE.1");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn quotes_are_doubled_and_wrapped() {
        assert_eq!(escape_field(r#"Say "hi""#), r#""Say ""hi""""#);
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn empty_result_set_is_header_only() {
        let doc = DocumentDescriptor::new("d", "quiz.pdf");
        let artifact = render(&doc, &[]);
        assert_eq!(
            artifact.text().unwrap(),
            "Question Number,Question Text,Standards,Rigor Level,DOK Level,Source,Confidence,Justification\n"
        );
        assert_eq!(artifact.filename, "quiz_analysis.csv");
    }
}
