//! Result-set sources: the asynchronous fetch boundary in front of the pipeline.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use sherpa_core::DocumentResults;

use crate::error::ExportError;

/// Supplies a document descriptor and its analyzed questions.
#[async_trait]
pub trait ResultSource: Send + Sync {
    async fn fetch(&self, document_id: &str) -> Result<DocumentResults, ExportError>;
}

/// Reads `<dir>/<document-id>.json`, each holding `{ "document": .., "results": [..] }`.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, document_id: &str) -> Result<PathBuf, ExportError> {
        let valid = !document_id.is_empty()
            && document_id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
            && !document_id.starts_with('.');
        if !valid {
            return Err(ExportError::source_fetch(document_id, "invalid document id"));
        }
        Ok(self.dir.join(format!("{document_id}.json")))
    }
}

#[async_trait]
impl ResultSource for JsonDirSource {
    async fn fetch(&self, document_id: &str) -> Result<DocumentResults, ExportError> {
        let path = self.path_for(document_id)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExportError::DocumentNotFound(document_id.to_string()));
            }
            Err(error) => {
                return Err(ExportError::source_fetch(
                    document_id,
                    format!("{}: {error}", path.display()),
                ));
            }
        };
        DocumentResults::from_json(&content)
            .inspect_err(|error| {
                tracing::warn!(path = %path.display(), %error, "result set failed to decode");
            })
            .map_err(ExportError::from)
    }
}

/// In-memory source for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, DocumentResults>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a result set under its document id.
    #[must_use]
    pub fn with_document(mut self, results: DocumentResults) -> Self {
        self.documents.insert(results.document.id.clone(), results);
        self
    }
}

#[async_trait]
impl ResultSource for MemorySource {
    async fn fetch(&self, document_id: &str) -> Result<DocumentResults, ExportError> {
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| ExportError::DocumentNotFound(document_id.to_string()))
    }
}
