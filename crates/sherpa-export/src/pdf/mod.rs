//! Paginated document back-ends.
//!
//! [`PaginatedBackend`] turns a [`TableDocument`] into bytes. [`PdfBackend`]
//! is the built-in implementation: landscape or portrait US Letter, the
//! standard Helvetica fonts, fixed column widths from the document's hints,
//! word wrapping, and a header row repeated on every page.

mod encoding;
mod layout;
mod writer;

use sherpa_config::PdfConfig;

use crate::error::ExportError;
use crate::table::TableDocument;

pub trait PaginatedBackend: Send + Sync {
    /// Lay out and serialize `document`.
    fn render(&self, document: &TableDocument) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone, Default)]
pub struct PdfBackend {
    config: PdfConfig,
}

impl PdfBackend {
    #[must_use]
    pub const fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl PaginatedBackend for PdfBackend {
    fn render(&self, document: &TableDocument) -> Result<Vec<u8>, ExportError> {
        if document.columns.is_empty() {
            return Err(ExportError::Backend("table has no columns".into()));
        }
        let widest_glyph = layout::text_width("M", layout::Font::Bold, self.config.font_size);
        let narrowest = document
            .column_fractions()
            .into_iter()
            .fold(f32::INFINITY, f32::min);
        let content_width = layout::content_width(document.orientation, self.config.margin);
        if narrowest * content_width - 2.0 * layout::CELL_PADDING < widest_glyph {
            return Err(ExportError::Backend(format!(
                "columns too narrow for {}pt text with a {}pt margin",
                self.config.font_size, self.config.margin
            )));
        }

        if layout::fresh_page_lines(document, &self.config) == 0 {
            return Err(ExportError::Backend(format!(
                "page too short for {}pt text with a {}pt margin",
                self.config.font_size, self.config.margin
            )));
        }

        let (size, pages) = layout::paginate(document, &self.config);
        tracing::debug!(pages = pages.len(), rows = document.rows.len(), "laid out table document");
        Ok(writer::write_pdf(size, &pages))
    }
}
