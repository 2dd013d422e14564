//! Renderer-agnostic description of a paginated table document.
//!
//! Renderers describe *what* to lay out; a [`crate::pdf::PaginatedBackend`]
//! decides how to paginate, wrap, and draw it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// A column heading plus its relative width.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub header: String,
    /// Relative width. Back-ends normalize hints against their sum, so columns
    /// keep the same widths on every page.
    pub width_hint: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    pub bold: bool,
    /// Gray level (0 = black, 1 = white) of the header background, if filled.
    pub fill_gray: Option<f32>,
    /// Repeat the header row at the top of every page.
    pub repeat_on_each_page: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            bold: true,
            fill_gray: Some(0.85),
            repeat_on_each_page: true,
        }
    }
}

/// Title, optional subtitle, and a table of string cells.
///
/// Cells may contain `\n` for explicit line breaks; back-ends wrap the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDocument {
    pub title: String,
    pub subtitle: Option<String>,
    pub orientation: Orientation,
    pub columns: Vec<ColumnSpec>,
    pub header_style: HeaderStyle,
    pub rows: Vec<Vec<String>>,
}

impl TableDocument {
    /// Width hints normalized to fractions summing to 1.
    #[must_use]
    pub fn column_fractions(&self) -> Vec<f32> {
        let total: f32 = self.columns.iter().map(|c| c.width_hint.max(0.0)).sum();
        if total <= 0.0 {
            #[allow(clippy::cast_precision_loss)]
            let even = 1.0 / self.columns.len().max(1) as f32;
            return vec![even; self.columns.len()];
        }
        self.columns
            .iter()
            .map(|c| c.width_hint.max(0.0) / total)
            .collect()
    }
}
