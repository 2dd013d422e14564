use serde::Serialize;
use sherpa_core::ExportFormat;
use sherpa_export::{ExportError, ExportReceipt};

use super::Pipeline;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;

/// One line of `export-all` output.
#[derive(Debug, Serialize)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub status: &'static str,
    pub filename: Option<String>,
    pub bytes: Option<usize>,
    pub error: Option<String>,
}

impl ExportOutcome {
    fn new(format: ExportFormat, outcome: Result<ExportReceipt, ExportError>) -> Self {
        match outcome {
            Ok(receipt) => Self {
                format,
                status: "ok",
                filename: Some(receipt.filename),
                bytes: Some(receipt.byte_len),
                error: None,
            },
            Err(error) => Self {
                format,
                status: "failed",
                filename: None,
                bytes: None,
                error: Some(error.to_string()),
            },
        }
    }
}

pub async fn run(args: &ExportArgs, pipeline: &Pipeline, flags: &GlobalFlags) -> anyhow::Result<()> {
    let receipt = pipeline
        .exporter
        .export_document(&pipeline.source, &pipeline.sink, &args.document_id, args.format)
        .await?;
    output(&receipt, flags.output)
}

pub async fn run_all(document_id: &str, pipeline: &Pipeline, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcomes: Vec<ExportOutcome> = pipeline
        .exporter
        .export_all(&pipeline.source, &pipeline.sink, document_id)
        .await?
        .into_iter()
        .map(|(format, outcome)| ExportOutcome::new(format, outcome))
        .collect();

    output(&outcomes, flags.output)?;

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} exports failed", outcomes.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn failed_outcome_carries_error_text() {
        let outcome = ExportOutcome::new(
            ExportFormat::Csv,
            Err(ExportError::DocumentNotFound("doc-9".into())),
        );
        assert_eq!(outcome.status, "failed");
        assert_eq!(outcome.error.as_deref(), Some("Document not found: doc-9"));
        assert!(outcome.filename.is_none());
    }

    #[test]
    fn successful_outcome_serializes_format_wire_name() {
        let outcome = ExportOutcome::new(
            ExportFormat::StandardsSummary,
            Ok(ExportReceipt {
                format: ExportFormat::StandardsSummary,
                filename: "quiz_standards_summary.txt".into(),
                mime_type: "text/plain",
                byte_len: 120,
            }),
        );
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["format"], "standards-summary");
        assert_eq!(value["status"], "ok");
        assert_eq!(value["bytes"], 120);
    }
}
