//! `WinAnsiEncoding` code points and Helvetica metrics.
//!
//! Both fonts are declared with `/WinAnsiEncoding`, so any character with a
//! code in that table renders with the built-in fonts. Everything else is
//! replaced before layout.

/// Advance widths for codes `0x20..=0x7E`, in 1/1000 em.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Advance widths for codes `0xA0..=0xFF`, which match Latin-1.
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Characters Windows-1252 places in `0x80..=0x9F`, with code and width.
const SPECIALS: [(char, u8, u16); 27] = [
    ('\u{20AC}', 0x80, 556),  // euro
    ('\u{201A}', 0x82, 222),  // single low quote
    ('\u{0192}', 0x83, 556),  // florin
    ('\u{201E}', 0x84, 333),  // double low quote
    ('\u{2026}', 0x85, 1000), // ellipsis
    ('\u{2020}', 0x86, 556),  // dagger
    ('\u{2021}', 0x87, 556),  // double dagger
    ('\u{02C6}', 0x88, 333),  // circumflex
    ('\u{2030}', 0x89, 1000), // per mille
    ('\u{0160}', 0x8A, 667),  // S caron
    ('\u{2039}', 0x8B, 333),  // single left guillemet
    ('\u{0152}', 0x8C, 1000), // OE
    ('\u{017D}', 0x8E, 611),  // Z caron
    ('\u{2018}', 0x91, 222),  // left single quote
    ('\u{2019}', 0x92, 222),  // right single quote
    ('\u{201C}', 0x93, 333),  // left double quote
    ('\u{201D}', 0x94, 333),  // right double quote
    ('\u{2022}', 0x95, 350),  // bullet
    ('\u{2013}', 0x96, 556),  // en dash
    ('\u{2014}', 0x97, 1000), // em dash
    ('\u{02DC}', 0x98, 333),  // small tilde
    ('\u{2122}', 0x99, 1000), // trade mark
    ('\u{0161}', 0x9A, 500),  // s caron
    ('\u{203A}', 0x9B, 333),  // single right guillemet
    ('\u{0153}', 0x9C, 944),  // oe
    ('\u{017E}', 0x9E, 500),  // z caron
    ('\u{0178}', 0x9F, 667),  // Y diaeresis
];

/// Stand-in for characters outside the encoding.
pub(crate) const REPLACEMENT: char = '?';

/// The `WinAnsiEncoding` byte for `ch`, if it has one.
pub(crate) fn encode(ch: char) -> Option<u8> {
    match u32::from(ch) {
        code @ (0x20..=0x7E | 0xA0..=0xFF) => u8::try_from(code).ok(),
        _ => SPECIALS
            .iter()
            .find(|(special, _, _)| *special == ch)
            .map(|(_, code, _)| *code),
    }
}

/// Helvetica advance width of an encoded byte, in 1/1000 em.
pub(crate) fn width(code: u8) -> u16 {
    match code {
        0x20..=0x7E => ASCII_WIDTHS[usize::from(code - 0x20)],
        0xA0..=0xFF => LATIN1_WIDTHS[usize::from(code - 0xA0)],
        _ => SPECIALS
            .iter()
            .find(|(_, special, _)| *special == code)
            .map_or(ASCII_WIDTHS[usize::from(b'?' - 0x20)], |(_, _, units)| *units),
    }
}
