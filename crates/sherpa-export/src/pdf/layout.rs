//! Text measurement, word wrapping, and pagination of a [`TableDocument`].
//!
//! Produces page-local drawing operations; [`super::writer`] turns them into
//! PDF objects. All coordinates are PDF points with the origin bottom-left.

use sherpa_config::PdfConfig;

use super::encoding;
use crate::table::{HeaderStyle, Orientation, TableDocument};

const LETTER_SHORT: f32 = 612.0;
const LETTER_LONG: f32 = 792.0;
pub(crate) const CELL_PADDING: f32 = 4.0;
const LINE_SPACING: f32 = 1.25;
const SUBTITLE_SCALE: f32 = 0.75;
const BOLD_WIDTH_FACTOR: f32 = 1.08;
const BORDER_WIDTH: f32 = 0.5;
const CLIPPED_MARKER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Regular,
    Bold,
}

impl Font {
    pub(crate) const fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Text {
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        text: String,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        gray: f32,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        line_width: f32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Page {
    pub ops: Vec<Op>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    const fn letter(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Landscape => Self {
                width: LETTER_LONG,
                height: LETTER_SHORT,
            },
            Orientation::Portrait => Self {
                width: LETTER_SHORT,
                height: LETTER_LONG,
            },
        }
    }
}

/// Width available to the table between the side margins.
pub(crate) fn content_width(orientation: Orientation, margin: f32) -> f32 {
    PageSize::letter(orientation).width - 2.0 * margin
}

fn char_width(ch: char, font: Font, size: f32) -> f32 {
    let units = encoding::width(encoding::encode(ch).unwrap_or(b'?'));
    let scale = match font {
        Font::Regular => 1.0,
        Font::Bold => BOLD_WIDTH_FACTOR,
    };
    f32::from(units) / 1000.0 * size * scale
}

pub(crate) fn text_width(text: &str, font: Font, size: f32) -> f32 {
    text.chars().map(|ch| char_width(ch, font, size)).sum()
}

/// Reduce text to what the built-in fonts can encode. Any line ending becomes
/// `\n`; characters outside `WinAnsiEncoding` become `?`.
pub(crate) fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            _ if encoding::encode(ch).is_some() => out.push(ch),
            _ => out.push(encoding::REPLACEMENT),
        }
    }
    out
}

/// Greedy word wrap. Explicit `\n` always breaks; words wider than the
/// column are split by character.
pub(crate) fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in sanitize(text).split('\n') {
        let mut current = String::new();
        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, font, size) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && text_width(&next, font, size) > max_width {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                } else {
                    current = next;
                }
            }
        }
        lines.push(current);
    }
    lines
}

struct Layout<'a> {
    config: &'a PdfConfig,
    size: PageSize,
    widths: Vec<f32>,
    leading: f32,
    header_style: HeaderStyle,
    header_cells: Vec<Vec<String>>,
    pages: Vec<Page>,
    page: Page,
    cursor: f32,
    rows_on_page: usize,
}

impl<'a> Layout<'a> {
    fn new(document: &TableDocument, config: &'a PdfConfig) -> Self {
        let size = PageSize::letter(document.orientation);
        let content_width = content_width(document.orientation, config.margin);
        let widths: Vec<f32> = document
            .column_fractions()
            .into_iter()
            .map(|fraction| fraction * content_width)
            .collect();
        let header_font = if document.header_style.bold {
            Font::Bold
        } else {
            Font::Regular
        };
        let header_cells = document
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| {
                wrap(
                    &column.header,
                    header_font,
                    config.font_size,
                    width - 2.0 * CELL_PADDING,
                )
            })
            .collect();

        Self {
            config,
            size,
            widths,
            leading: config.font_size * LINE_SPACING,
            header_style: document.header_style,
            header_cells,
            pages: Vec::new(),
            page: Page::default(),
            cursor: size.height - config.margin,
            rows_on_page: 0,
        }
    }

    /// Lowest y a row may reach; the strip below holds the page footer.
    fn floor(&self) -> f32 {
        self.config.margin + 2.0 * self.leading
    }

    /// Body lines that fit in one row starting at `cursor`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn lines_fitting(&self, cursor: f32) -> usize {
        let available = cursor - self.floor() - 2.0 * CELL_PADDING;
        (available / self.leading).floor().max(0.0) as usize
    }

    fn row_height(&self, lines: usize) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let lines = lines.max(1) as f32;
        lines * self.leading + 2.0 * CELL_PADDING
    }

    fn heading(&mut self, text: &str, size: f32) {
        self.cursor -= size;
        self.page.ops.push(Op::Text {
            font: Font::Bold,
            size,
            x: self.config.margin,
            y: self.cursor,
            text: sanitize(text).replace('\n', " "),
        });
        self.cursor -= size * 0.5;
    }

    fn header_row(&mut self) {
        let font = if self.header_style.bold {
            Font::Bold
        } else {
            Font::Regular
        };
        let cells = self.header_cells.clone();
        self.draw_row(&cells, font, self.header_style.fill_gray);
    }

    fn draw_row(&mut self, cells: &[Vec<String>], font: Font, fill_gray: Option<f32>) {
        let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
        let height = self.row_height(lines);
        let bottom = self.cursor - height;
        let mut x = self.config.margin;

        for (cell, width) in cells.iter().zip(self.widths.clone()) {
            if let Some(gray) = fill_gray {
                self.page.ops.push(Op::FillRect {
                    x,
                    y: bottom,
                    width,
                    height,
                    gray,
                });
            }
            self.page.ops.push(Op::StrokeRect {
                x,
                y: bottom,
                width,
                height,
                line_width: BORDER_WIDTH,
            });
            let mut baseline = self.cursor - CELL_PADDING - self.config.font_size;
            for line in cell {
                if !line.is_empty() {
                    self.page.ops.push(Op::Text {
                        font,
                        size: self.config.font_size,
                        x: x + CELL_PADDING,
                        y: baseline,
                        text: line.clone(),
                    });
                }
                baseline -= self.leading;
            }
            x += width;
        }
        self.cursor = bottom;
    }

    /// Cursor below the repeated header on a continuation page.
    fn fresh_page_cursor(&self) -> f32 {
        let top = self.size.height - self.config.margin;
        if self.header_style.repeat_on_each_page {
            let lines = self.header_cells.iter().map(Vec::len).max().unwrap_or(1);
            top - self.row_height(lines)
        } else {
            top
        }
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.page);
        self.pages.push(finished);
        self.cursor = self.size.height - self.config.margin;
        self.rows_on_page = 0;
        if self.header_style.repeat_on_each_page {
            self.header_row();
        }
    }

    fn body_row(&mut self, row: &[String]) {
        let mut cells: Vec<Vec<String>> = self
            .widths
            .iter()
            .enumerate()
            .map(|(idx, width)| {
                let text = row.get(idx).map_or("", String::as_str);
                wrap(
                    text,
                    Font::Regular,
                    self.config.font_size,
                    width - 2.0 * CELL_PADDING,
                )
            })
            .collect();

        let lines = cells.iter().map(Vec::len).max().unwrap_or(1);
        let overflows = self.cursor - self.row_height(lines) < self.floor();
        if overflows && (self.rows_on_page > 0 || self.fresh_page_cursor() > self.cursor) {
            self.new_page();
        }

        // Only reached on a fresh page, which holds at least one line.
        let max_lines = self.lines_fitting(self.cursor).max(1);
        if lines > max_lines {
            for cell in &mut cells {
                if cell.len() > max_lines {
                    cell.truncate(max_lines);
                    if let Some(last) = cell.last_mut() {
                        last.push_str(CLIPPED_MARKER);
                    }
                }
            }
        }

        self.draw_row(&cells, Font::Regular, None);
        self.rows_on_page += 1;
    }

    fn finish(mut self) -> (PageSize, Vec<Page>) {
        self.pages.push(std::mem::take(&mut self.page));
        let total = self.pages.len();
        for (idx, page) in self.pages.iter_mut().enumerate() {
            let label = format!("Page {} of {total}", idx + 1);
            let width = text_width(&label, Font::Regular, self.config.font_size);
            page.ops.push(Op::Text {
                font: Font::Regular,
                size: self.config.font_size,
                x: self.size.width - self.config.margin - width,
                y: self.config.margin,
                text: label,
            });
        }
        (self.size, self.pages)
    }
}

/// Body lines a single row may hold on a continuation page.
pub(crate) fn fresh_page_lines(document: &TableDocument, config: &PdfConfig) -> usize {
    let layout = Layout::new(document, config);
    layout.lines_fitting(layout.fresh_page_cursor())
}

/// Lay `document` out on as many pages as its rows need.
///
/// The title and subtitle appear on the first page only. The header row is
/// drawn on the first page and, when the style asks for it, on every
/// continuation page. A row that does not fit in the room left moves to a
/// fresh page, even when it is the first row on page one. Only a row taller
/// than a fresh page is clipped, its last visible line marked with `...`.
pub(crate) fn paginate(document: &TableDocument, config: &PdfConfig) -> (PageSize, Vec<Page>) {
    let mut layout = Layout::new(document, config);

    layout.heading(&document.title, config.title_font_size);
    if let Some(subtitle) = &document.subtitle {
        layout.heading(subtitle, config.title_font_size * SUBTITLE_SCALE);
    }
    layout.cursor -= layout.leading * 0.5;
    layout.header_row();

    for row in &document.rows {
        layout.body_row(row);
    }

    layout.finish()
}
