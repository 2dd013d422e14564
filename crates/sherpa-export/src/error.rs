//! Export error types.
//!
//! Only the two I/O boundaries fail: fetching a result set and delivering an
//! artifact. Rendering itself is total, except for a pluggable document
//! back-end that may reject its input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The result set for a document could not be fetched. No renderer ran.
    #[error("Failed to fetch results for document '{document_id}': {reason}")]
    SourceFetch { document_id: String, reason: String },

    /// No result set exists for the requested document.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// The rendered artifact could not be handed to its destination.
    #[error("Failed to deliver '{filename}': {reason}")]
    Delivery { filename: String, reason: String },

    /// A paginated-document back-end rejected the table description.
    #[error("Document back-end error: {0}")]
    Backend(String),

    /// Core model error (payload decoding, unknown format names).
    #[error(transparent)]
    Core(#[from] sherpa_core::CoreError),
}

impl ExportError {
    pub(crate) fn source_fetch(document_id: &str, reason: impl ToString) -> Self {
        Self::SourceFetch {
            document_id: document_id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn delivery(filename: &str, reason: impl ToString) -> Self {
        Self::Delivery {
            filename: filename.to_string(),
            reason: reason.to_string(),
        }
    }
}
