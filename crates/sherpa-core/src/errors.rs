//! Error types for the assessment model.
//!
//! The resolution stages themselves never fail. These errors come from parsing
//! wire input and string-typed identifiers at the crate boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A rigor level string was not one of `mild`, `medium`, `spicy`.
    #[error("Unknown rigor level: {0}")]
    UnknownRigorLevel(String),

    /// An export format string did not name one of the four renderers.
    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),

    /// Result payload could not be decoded.
    #[error("Invalid result payload: {0}")]
    Payload(#[from] serde_json::Error),
}
