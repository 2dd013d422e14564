use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{QuestionResult, null_as_default};
use crate::errors::CoreError;

/// Name used when a document has no usable display name.
const FALLBACK_BASE_NAME: &str = "document";

/// Identifies the source document an export is produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub file_name: String,
}

impl DocumentDescriptor {
    pub fn new(id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_name: file_name.into(),
        }
    }

    /// Display name with its last extension removed.
    ///
    /// `"Unit 3 Quiz.pdf"` becomes `"Unit 3 Quiz"`. A leading dot (`".env"`)
    /// is part of the name, not an extension.
    #[must_use]
    pub fn base_name(&self) -> &str {
        let name = self.file_name.trim();
        let stem = match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        };
        if stem.is_empty() {
            FALLBACK_BASE_NAME
        } else {
            stem
        }
    }
}

/// A document together with its analyzed questions, as fetched from a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentResults {
    pub document: DocumentDescriptor,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<QuestionResult>>")]
    pub results: Vec<QuestionResult>,
}

impl DocumentResults {
    /// Decode a `{ "document": .., "results": [..] }` payload.
    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_last_extension_only() {
        assert_eq!(DocumentDescriptor::new("d1", "Unit 3 Quiz.pdf").base_name(), "Unit 3 Quiz");
        assert_eq!(DocumentDescriptor::new("d1", "quiz.v2.docx").base_name(), "quiz.v2");
        assert_eq!(DocumentDescriptor::new("d1", "worksheet").base_name(), "worksheet");
    }

    #[test]
    fn base_name_keeps_dotfiles_and_falls_back_when_empty() {
        assert_eq!(DocumentDescriptor::new("d1", ".hidden").base_name(), ".hidden");
        assert_eq!(DocumentDescriptor::new("d1", "").base_name(), "document");
        assert_eq!(DocumentDescriptor::new("d1", "   ").base_name(), "document");
    }

    #[test]
    fn from_json_reports_malformed_payload() {
        let err = DocumentResults::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));
    }

    #[test]
    fn null_file_name_and_results_decode_as_empty() {
        let decoded = DocumentResults::from_json(
            r#"{"document":{"id":"d1","fileName":null},"results":null}"#,
        )
        .unwrap();

        assert_eq!(decoded.document.file_name, "");
        assert_eq!(decoded.document.base_name(), "document");
        assert!(decoded.results.is_empty());
    }
}
