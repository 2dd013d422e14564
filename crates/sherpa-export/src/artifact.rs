//! Rendered export artifacts.

use serde::Serialize;
use sherpa_core::{DocumentDescriptor, ExportFormat};

/// Bytes ready for delivery together with their suggested name and MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub format: ExportFormat,
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(document: &DocumentDescriptor, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            filename: artifact_filename(document, format),
            mime_type: format.mime_type(),
            bytes,
        }
    }

    /// Body as UTF-8 text, for the text-based formats.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    #[must_use]
    pub fn receipt(&self) -> ExportReceipt {
        ExportReceipt {
            format: self.format,
            filename: self.filename.clone(),
            mime_type: self.mime_type,
            byte_len: self.bytes.len(),
        }
    }
}

/// Summary of a delivered artifact, returned to the caller of an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub filename: String,
    pub mime_type: &'static str,
    pub byte_len: usize,
}

/// `{base name}{suffix}.{extension}`, e.g. `Unit 3 Quiz_rubric.md`.
#[must_use]
pub fn artifact_filename(document: &DocumentDescriptor, format: ExportFormat) -> String {
    format!(
        "{}{}.{}",
        document.base_name(),
        format.suffix(),
        format.extension()
    )
}
