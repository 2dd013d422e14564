//! Rendering options shared by all renderers.

use sherpa_config::{PdfConfig, SherpaConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Characters of question text kept in a rubric criteria cell.
    pub question_preview_chars: usize,
    /// Page layout for the paginated rubric.
    pub pdf: PdfConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&SherpaConfig::default())
    }
}

impl RenderOptions {
    #[must_use]
    pub fn from_config(config: &SherpaConfig) -> Self {
        Self {
            question_preview_chars: config.export.question_preview_chars,
            pdf: config.pdf.clone(),
        }
    }
}
