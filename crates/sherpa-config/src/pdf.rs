//! Page layout for the paginated rubric document.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Columns in the rubric table: criteria plus four credit tiers.
pub const RUBRIC_COLUMNS: usize = 5;

const fn default_font_size() -> f32 {
    9.0
}

const fn default_title_font_size() -> f32 {
    16.0
}

const fn default_margin() -> f32 {
    36.0
}

fn default_column_widths() -> Vec<f32> {
    vec![0.24, 0.19, 0.19, 0.19, 0.19]
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PdfConfig {
    /// Body font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Title font size in points.
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f32,

    /// Page margin on every side, in points.
    #[serde(default = "default_margin")]
    pub margin: f32,

    /// Relative column widths. Normalized against their sum when laid out.
    #[serde(default = "default_column_widths")]
    pub column_widths: Vec<f32>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            title_font_size: default_title_font_size(),
            margin: default_margin(),
            column_widths: default_column_widths(),
        }
    }
}

impl PdfConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.font_size <= 0.0 || self.title_font_size <= 0.0 {
            return Err(ConfigError::invalid("pdf.font_size", "font sizes must be positive"));
        }
        if self.margin < 0.0 || self.margin >= 200.0 {
            return Err(ConfigError::invalid("pdf.margin", "must be in [0, 200) points"));
        }
        if self.column_widths.len() != RUBRIC_COLUMNS {
            return Err(ConfigError::invalid(
                "pdf.column_widths",
                format!(
                    "expected {RUBRIC_COLUMNS} widths, got {}",
                    self.column_widths.len()
                ),
            ));
        }
        if self.column_widths.iter().any(|width| *width <= 0.0) {
            return Err(ConfigError::invalid("pdf.column_widths", "widths must be positive"));
        }
        Ok(())
    }
}
