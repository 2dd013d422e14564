//! Minimal PDF 1.4 serializer for laid-out pages.
//!
//! Object layout is fixed so output is byte-for-byte reproducible:
//!
//! ```text
//! 1 catalog, 2 page tree, 3 Helvetica, 4 Helvetica-Bold,
//! then per page n: (5 + 2n) page, (6 + 2n) content stream
//! ```
//!
//! No timestamps, IDs, or compression are written.

use std::fmt::Write as _;

use super::encoding;
use super::layout::{Font, Op, Page, PageSize};

const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";
const FIRST_PAGE_ID: usize = 5;

struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        Self {
            buf: HEADER.to_vec(),
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, body: &str) {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf
            .extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
    }

    fn stream(&mut self, content: &str) {
        self.object(&format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ));
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let count = self.offsets.len() + 1;
        let mut tail = format!("xref\n0 {count}\n0000000000 65535 f \n");
        for offset in &self.offsets {
            let _ = writeln!(tail, "{offset:010} 00000 n ");
        }
        let _ = write!(
            tail,
            "trailer\n<< /Size {count} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        );
        self.buf.extend_from_slice(tail.as_bytes());
        self.buf
    }
}

const fn page_id(index: usize) -> usize {
    FIRST_PAGE_ID + 2 * index
}

/// Serialize pages into a complete PDF file.
pub(crate) fn write_pdf(size: PageSize, pages: &[Page]) -> Vec<u8> {
    let mut writer = ObjectWriter::new();

    writer.object("<< /Type /Catalog /Pages 2 0 R >>");
    let kids = (0..pages.len())
        .map(|index| format!("{} 0 R", page_id(index)))
        .collect::<Vec<_>>()
        .join(" ");
    writer.object(&format!(
        "<< /Type /Pages /Kids [{kids}] /Count {} >>",
        pages.len()
    ));
    writer.object(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    writer.object(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    );

    for (index, page) in pages.iter().enumerate() {
        writer.object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
            number(size.width),
            number(size.height),
            page_id(index) + 1
        ));
        writer.stream(&content_stream(page));
    }

    writer.finish()
}

fn content_stream(page: &Page) -> String {
    let mut out = String::new();
    for op in &page.ops {
        match op {
            Op::FillRect {
                x,
                y,
                width,
                height,
                gray,
            } => {
                let _ = writeln!(
                    out,
                    "{} g {} {} {} {} re f 0 g",
                    number(*gray),
                    number(*x),
                    number(*y),
                    number(*width),
                    number(*height)
                );
            }
            Op::StrokeRect {
                x,
                y,
                width,
                height,
                line_width,
            } => {
                let _ = writeln!(
                    out,
                    "{} w {} {} {} {} re S",
                    number(*line_width),
                    number(*x),
                    number(*y),
                    number(*width),
                    number(*height)
                );
            }
            Op::Text {
                font,
                size,
                x,
                y,
                text,
            } => {
                let _ = writeln!(
                    out,
                    "BT /{} {} Tf {} {} Td ({}) Tj ET",
                    Font::resource(*font),
                    number(*size),
                    number(*x),
                    number(*y),
                    escape_text(text)
                );
            }
        }
    }
    out.trim_end().to_string()
}

/// Fixed two-decimal rendering keeps streams stable across runs.
fn number(value: f32) -> String {
    format!("{value:.2}")
}

/// Encode `text` as a `WinAnsiEncoding` string literal body. Bytes above
/// ASCII are written as octal escapes so the stream stays 7-bit.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match encoding::encode(ch) {
            Some(b'\\' | b'(' | b')') => {
                out.push('\\');
                out.push(ch);
            }
            Some(code) if code.is_ascii() => out.push(ch),
            Some(code) => {
                let _ = write!(out, "\\{code:03o}");
            }
            None => out.push(encoding::REPLACEMENT),
        }
    }
    out
}
