//! Classification of raw body lines
//!
//! Each line of the letter body is either blank, a "label : value" row that
//! is laid out as a two-column table, or paragraph text. The rules are
//! applied in order:
//!
//! 1. whitespace only → `Blank`
//! 2. starts with "NIF" or "RAISON SOCIALE" (any case) → `TableRow`
//! 3. contains ':' and the text before the first ':' is under
//!    [`TABLE_LABEL_MAX_CHARS`] characters → `TableRow`
//! 4. anything else → `Paragraph`, indented unless it already starts with
//!    whitespace
//!
//! Rule 3 also catches ordinary sentences with an early colon. The threshold
//! is kept as is for compatibility with existing letters.

/// Labels strictly shorter than this (in characters) make a table row.
pub const TABLE_LABEL_MAX_CHARS: usize = 20;

/// Inserted in front of paragraphs that do not carry their own indent.
pub const PARAGRAPH_INDENT: &str = "        ";

const TABLE_PREFIXES: [&str; 2] = ["NIF", "RAISON SOCIALE"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Blank,
    TableRow { key: String, value: String },
    Paragraph(String),
}

pub fn classify(raw: &str) -> BodyLine {
    let line = raw.trim();
    if line.is_empty() {
        return BodyLine::Blank;
    }

    let upper = line.to_uppercase();
    if TABLE_PREFIXES.iter().any(|prefix| upper.starts_with(prefix)) {
        return split_row(line);
    }

    if let Some((label, _)) = line.split_once(':') {
        if label.chars().count() < TABLE_LABEL_MAX_CHARS {
            return split_row(line);
        }
    }

    let text = raw.trim_end();
    if text.starts_with(char::is_whitespace) {
        BodyLine::Paragraph(text.to_string())
    } else {
        BodyLine::Paragraph(format!("{}{}", PARAGRAPH_INDENT, text))
    }
}

/// Split on the first ':'; a line without one keeps an empty value.
fn split_row(line: &str) -> BodyLine {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    BodyLine::TableRow {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
    }
}

/// Classify every line of a body, in order.
///
/// Splits on '\n' only, so a trailing newline gives a final `Blank` and an
/// empty body is one `Blank` line.
pub fn classify_body(body: &str) -> Vec<BodyLine> {
    body.split('\n').map(classify).collect()
}
