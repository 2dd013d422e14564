//! Fetch and delivery boundaries around the render pipeline.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use sherpa_core::{DocumentDescriptor, DocumentResults, ExportFormat, QuestionResult};
use sherpa_export::{
    ArtifactSink, ExportError, Exporter, FileSink, JsonDirSource, MemorySink, MemorySource,
    ResultSource,
};

struct FailingSource;

#[async_trait]
impl ResultSource for FailingSource {
    async fn fetch(&self, document_id: &str) -> Result<DocumentResults, ExportError> {
        Err(ExportError::SourceFetch {
            document_id: document_id.to_string(),
            reason: "connection reset".into(),
        })
    }
}

struct FailingSink;

#[async_trait]
impl ArtifactSink for FailingSink {
    async fn deliver(&self, _: &[u8], filename: &str, _: &str) -> Result<(), ExportError> {
        Err(ExportError::Delivery {
            filename: filename.to_string(),
            reason: "disk full".into(),
        })
    }
}

fn quiz() -> DocumentResults {
    DocumentResults {
        document: DocumentDescriptor::new("quiz-1", "Fractions Quiz.docx"),
        results: vec![QuestionResult::new(1, "Add 1/2 and 1/3")],
    }
}

#[tokio::test]
async fn fetch_failure_skips_rendering_and_delivery() {
    let sink = MemorySink::new();
    let err = Exporter::default()
        .export_document(&FailingSource, &sink, "quiz-1", ExportFormat::Csv)
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::SourceFetch { .. }));
    assert!(sink.deliveries().is_empty());
}

#[tokio::test]
async fn unknown_document_is_reported() {
    let err = Exporter::default()
        .export_document(&MemorySource::new(), &MemorySink::new(), "missing", ExportFormat::Csv)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Document not found: missing");
}

#[tokio::test]
async fn delivery_failure_is_returned() {
    let source = MemorySource::new().with_document(quiz());
    let err = Exporter::default()
        .export_document(&source, &FailingSink, "quiz-1", ExportFormat::RubricMarkdown)
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::Delivery { filename, .. } if filename == "Fractions Quiz_rubric.md"));
}

#[tokio::test]
async fn successful_export_hands_artifact_to_sink() {
    let source = MemorySource::new().with_document(quiz());
    let sink = MemorySink::new();

    let receipt = Exporter::default()
        .export_document(&source, &sink, "quiz-1", ExportFormat::Csv)
        .await
        .unwrap();

    let deliveries = sink.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].filename, "Fractions Quiz_analysis.csv");
    assert_eq!(deliveries[0].mime_type, "text/csv");
    assert_eq!(receipt.byte_len, deliveries[0].bytes.len());
}

#[tokio::test]
async fn json_directory_to_file_sink() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(
        input.path().join("quiz-1.json"),
        serde_json::to_string(&quiz()).unwrap(),
    )
    .unwrap();

    let outcomes = Exporter::default()
        .export_all(
            &JsonDirSource::new(input.path()),
            &FileSink::new(output.path()),
            "quiz-1",
        )
        .await
        .unwrap();

    assert_eq!(outcomes.len(), 4);
    for (_, outcome) in outcomes {
        let receipt = outcome.unwrap();
        let written = std::fs::read(output.path().join(&receipt.filename)).unwrap();
        assert_eq!(written.len(), receipt.byte_len);
    }
}

#[tokio::test]
async fn undecodable_result_set_is_a_core_error_and_nothing_is_delivered() {
    let input = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("quiz-1.json"), r#"{"document": 7}"#).unwrap();
    let sink = MemorySink::new();

    let err = Exporter::default()
        .export_document(
            &JsonDirSource::new(input.path()),
            &sink,
            "quiz-1",
            ExportFormat::StandardsSummary,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Core(sherpa_core::CoreError::Payload(_))));
    assert!(sink.deliveries().is_empty());
}
