//! Export host settings: where results come from and where artifacts go.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default number of question-text characters shown in a rubric criteria cell.
const fn default_question_preview_chars() -> usize {
    40
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_source_dir() -> String {
    "results".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory rendered artifacts are written to by the file sink.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Directory holding `<document-id>.json` result sets.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Question text longer than this is truncated with `...` in rubric tables.
    #[serde(default = "default_question_preview_chars")]
    pub question_preview_chars: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            source_dir: default_source_dir(),
            question_preview_chars: default_question_preview_chars(),
        }
    }
}

impl ExportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.question_preview_chars == 0 {
            return Err(ConfigError::invalid(
                "export.question_preview_chars",
                "must be at least 1",
            ));
        }
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::invalid("export.output_dir", "must not be empty"));
        }
        Ok(())
    }
}
