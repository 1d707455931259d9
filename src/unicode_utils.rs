//! Unicode utilities for PDF text rendering
//!
//! The built-in Type1 fonts are declared with WinAnsiEncoding, which is
//! Latin-1 plus a handful of typographic characters in 0x80..0x9F. That covers
//! French text, including œ, « », typographic quotes and the euro sign.

/// Convert a Unicode string to WinAnsiEncoding bytes.
///
/// Characters outside the encoding are replaced with '?'.
pub fn unicode_to_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

/// Whether every character of `text` survives the conversion unchanged.
pub fn is_winansi(text: &str) -> bool {
    text.chars().all(|ch| ch == '?' || winansi_byte(ch) != b'?')
}

fn winansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    if code <= 0x7F || (0xA0..=0xFF).contains(&code) {
        return code as u8;
    }
    match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}
