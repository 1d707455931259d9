//! Static glyph-width tables for the PDF core fonts used by the letter template.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em, indexed by
//! `(char as usize) - 32` over printable ASCII (0x20..=0x7E). Latin-1 accented
//! letters share the advance of their base letter in both Times faces, so they
//! are folded before lookup. Characters the WinAnsi text encoding cannot carry
//! are drawn as '?', and are measured that way too.

/// Width table for one core font.
pub struct FontMetrics {
    pub name: &'static str,
    widths: [u16; 95],
    /// Non-ASCII glyphs that do not fold onto an ASCII letter.
    extras: &'static [(char, u16)],
}

impl FontMetrics {
    /// Advance width of one character, in 1/1000 em.
    pub fn glyph_width(&self, ch: char) -> u16 {
        if let Some(width) = self.ascii_width(ch) {
            return width;
        }
        if let Some(base) = fold_accent(ch) {
            if let Some(width) = self.ascii_width(base) {
                return width;
            }
        }
        if let Some(&(_, width)) = self.extras.iter().find(|(c, _)| *c == ch) {
            return width;
        }
        self.ascii_width('?').unwrap_or(500)
    }

    /// Width of `text` set at `font_size` points, in points.
    pub fn string_width_pt(&self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|ch| self.glyph_width(ch) as u32).sum();
        units as f64 * font_size / 1000.0
    }

    fn ascii_width(&self, ch: char) -> Option<u16> {
        let code = ch as usize;
        if (32..=126).contains(&code) {
            Some(self.widths[code - 32])
        } else {
            None
        }
    }
}

/// Map a Latin-1 (or WinAnsi) accented letter onto its unaccented base letter.
fn fold_accent(ch: char) -> Option<char> {
    let base = match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Š' => 'S',
        'Ž' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        '\u{00A0}' => ' ',
        _ => return None,
    };
    Some(base)
}

pub static TIMES_ROMAN: FontMetrics = FontMetrics {
    name: "Times-Roman",
    widths: [
        // space ! " # $ % & ' ( ) * + , - . /
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        // 0-9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // : ; < = > ? @
        278, 278, 564, 564, 564, 444, 921,
        // A-Z
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, 556,
        722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        // [ \ ] ^ _ `
        333, 278, 333, 469, 500, 333,
        // a-z
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500, 500,
        500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        // { | } ~
        480, 200, 480, 541,
    ],
    extras: &[
        ('°', 400),
        ('\u{2018}', 333),
        ('\u{2019}', 333),
        ('\u{201C}', 444),
        ('\u{201D}', 444),
        ('«', 500),
        ('»', 500),
        ('–', 500),
        ('—', 1000),
        ('…', 1000),
        ('•', 350),
        ('€', 500),
        ('œ', 722),
        ('Œ', 889),
        ('æ', 667),
        ('Æ', 889),
        ('ß', 500),
        ('§', 500),
        ('·', 250),
    ],
};

pub static TIMES_BOLD: FontMetrics = FontMetrics {
    name: "Times-Bold",
    widths: [
        // space ! " # $ % & ' ( ) * + , - . /
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        // 0-9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // : ; < = > ? @
        333, 333, 570, 570, 570, 500, 930,
        // A-Z
        722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778, 611,
        778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
        // [ \ ] ^ _ `
        333, 278, 333, 581, 500, 333,
        // a-z
        500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500, 556,
        556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
        // { | } ~
        394, 220, 394, 520,
    ],
    extras: &[
        ('°', 400),
        ('\u{2018}', 333),
        ('\u{2019}', 333),
        ('\u{201C}', 500),
        ('\u{201D}', 500),
        ('«', 500),
        ('»', 500),
        ('–', 500),
        ('—', 1000),
        ('…', 1000),
        ('•', 350),
        ('€', 500),
        ('œ', 722),
        ('Œ', 1000),
        ('æ', 722),
        ('Æ', 1000),
        ('ß', 556),
        ('§', 500),
        ('·', 250),
    ],
};
