//! Export orchestration: fetch, normalize, render, deliver.
//!
//! Every render starts from one normalized result set, so all four formats
//! agree on question order and on each question's effective values. The
//! coverage map is computed only for the summary, the one format that needs it.

use chrono::{DateTime, Utc};
use sherpa_core::{DocumentResults, ExportFormat, aggregate, normalize};

use crate::artifact::{Artifact, ExportReceipt};
use crate::error::ExportError;
use crate::options::RenderOptions;
use crate::pdf::{PaginatedBackend, PdfBackend};
use crate::sink::ArtifactSink;
use crate::source::ResultSource;
use crate::{csv, markdown, summary, tabular};

pub struct Exporter {
    options: RenderOptions,
    backend: Box<dyn PaginatedBackend>,
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Exporter {
    /// Exporter using the built-in PDF back-end configured from `options`.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        let backend = Box::new(PdfBackend::new(options.pdf.clone()));
        Self { options, backend }
    }

    /// Replace the paginated-document back-end.
    #[must_use]
    pub fn with_backend(mut self, backend: Box<dyn PaginatedBackend>) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one format from an already-fetched result set.
    ///
    /// `generated_at` is only read by the summary; the other formats are a
    /// pure function of `results`.
    pub fn render(
        &self,
        format: ExportFormat,
        results: &DocumentResults,
        generated_at: DateTime<Utc>,
    ) -> Result<Artifact, ExportError> {
        let document = &results.document;
        let items = normalize(&results.results);

        let artifact = match format {
            ExportFormat::RubricMarkdown => markdown::render(document, &items, &self.options),
            ExportFormat::RubricPdf => {
                tabular::render(document, &items, &self.options, self.backend.as_ref())?
            }
            ExportFormat::Csv => csv::render(document, &items),
            ExportFormat::StandardsSummary => {
                let coverage = aggregate(&items);
                summary::render(document, &items, &coverage, generated_at)
            }
        };

        tracing::debug!(
            document = %document.id,
            format = %format,
            questions = items.len(),
            bytes = artifact.bytes.len(),
            "rendered artifact"
        );
        Ok(artifact)
    }

    /// Fetch `document_id`, render `format`, and deliver it to `sink`.
    ///
    /// A fetch failure returns before any rendering and the sink is never
    /// called.
    pub async fn export_document(
        &self,
        source: &dyn ResultSource,
        sink: &dyn ArtifactSink,
        document_id: &str,
        format: ExportFormat,
    ) -> Result<ExportReceipt, ExportError> {
        let results = source.fetch(document_id).await.inspect_err(|error| {
            tracing::warn!(document = document_id, %error, "failed to fetch results");
        })?;
        self.deliver(sink, &results, format).await
    }

    /// Fetch once, then render and deliver every format in
    /// [`ExportFormat::ALL`] order.
    ///
    /// Only a fetch failure fails the whole call. Each format is rendered and
    /// delivered independently, so one failure leaves the others untouched.
    pub async fn export_all(
        &self,
        source: &dyn ResultSource,
        sink: &dyn ArtifactSink,
        document_id: &str,
    ) -> Result<Vec<(ExportFormat, Result<ExportReceipt, ExportError>)>, ExportError> {
        let results = source.fetch(document_id).await?;
        let mut outcomes = Vec::with_capacity(ExportFormat::ALL.len());
        for format in ExportFormat::ALL {
            let outcome = self.deliver(sink, &results, format).await;
            if let Err(error) = &outcome {
                tracing::warn!(document = document_id, %format, %error, "export failed");
            }
            outcomes.push((format, outcome));
        }
        Ok(outcomes)
    }

    async fn deliver(
        &self,
        sink: &dyn ArtifactSink,
        results: &DocumentResults,
        format: ExportFormat,
    ) -> Result<ExportReceipt, ExportError> {
        let artifact = self.render(format, results, Utc::now())?;
        sink.deliver(&artifact.bytes, &artifact.filename, artifact.mime_type)
            .await?;
        tracing::info!(
            document = %results.document.id,
            filename = %artifact.filename,
            "exported artifact"
        );
        Ok(artifact.receipt())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use sherpa_core::{DocumentDescriptor, QuestionResult};

    use super::*;
    use crate::sink::MemorySink;
    use crate::source::MemorySource;
    use crate::table::TableDocument;

    struct RejectingBackend;

    impl PaginatedBackend for RejectingBackend {
        fn render(&self, _: &TableDocument) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::Backend("rejected".into()))
        }
    }

    fn results() -> DocumentResults {
        DocumentResults {
            document: DocumentDescriptor::new("doc-1", "Quiz.pdf"),
            results: vec![QuestionResult::new(2, "Two"), QuestionResult::new(1, "One")],
        }
    }

    #[test]
    fn render_is_deterministic_for_a_fixed_timestamp() {
        let exporter = Exporter::default();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        for format in ExportFormat::ALL {
            let first = exporter.render(format, &results(), at).unwrap();
            let second = exporter.render(format, &results(), at).unwrap();
            assert_eq!(first, second, "{format} output differs between runs");
        }
    }

    #[test]
    fn custom_backend_errors_propagate() {
        let exporter = Exporter::default().with_backend(Box::new(RejectingBackend));
        let err = exporter
            .render(ExportFormat::RubricPdf, &results(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, ExportError::Backend(_)));

        assert!(exporter.render(ExportFormat::Csv, &results(), Utc::now()).is_ok());
    }

    #[tokio::test]
    async fn export_all_delivers_each_format_once() {
        let source = MemorySource::new().with_document(results());
        let sink = MemorySink::new();

        let outcomes = Exporter::default()
            .export_all(&source, &sink, "doc-1")
            .await
            .unwrap();

        let names: Vec<String> = sink.deliveries().into_iter().map(|d| d.filename).collect();
        assert_eq!(
            names,
            vec![
                "Quiz_rubric.md",
                "Quiz_rubric.pdf",
                "Quiz_analysis.csv",
                "Quiz_standards_summary.txt"
            ]
        );
        assert!(outcomes.iter().all(|(_, outcome)| outcome.is_ok()));
    }

    #[tokio::test]
    async fn export_all_continues_past_a_failing_format() {
        let source = MemorySource::new().with_document(results());
        let sink = MemorySink::new();

        let outcomes = Exporter::default()
            .with_backend(Box::new(RejectingBackend))
            .export_all(&source, &sink, "doc-1")
            .await
            .unwrap();

        let failed: Vec<ExportFormat> = outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_err())
            .map(|(format, _)| *format)
            .collect();
        assert_eq!(failed, vec![ExportFormat::RubricPdf]);
        assert_eq!(sink.deliveries().len(), 3);
    }
}
