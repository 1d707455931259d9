//! Text layout and line breaking
//!
//! Greedy word wrapping against measured widths. Words are separated by single
//! spaces; runs of spaces collapse. A leading run of whitespace (the paragraph
//! indent) is kept in front of the first line and counts toward its width.

use crate::error::RendererResult;
use crate::font_registry::FontRegistry;

/// Line breaker for wrapping text to a fixed column width
pub struct LineBreaker {
    max_width: f64,
}

impl LineBreaker {
    /// `max_width` is in document units (mm).
    pub fn new(max_width: f64) -> Self {
        Self { max_width }
    }

    /// Break text into lines that each measure at most `max_width`.
    ///
    /// A word wider than the column on its own is emitted unsplit as its own
    /// line. Text without any word yields no lines.
    pub fn break_text(
        &self,
        text: &str,
        font_name: &str,
        font_size: f64,
        fonts: &FontRegistry,
    ) -> RendererResult<Vec<String>> {
        // Resolve the font up front so an unknown font fails even on empty text
        fonts.get(font_name)?;

        let body = text.trim_start_matches([' ', '\t']);
        let indent = &text[..text.len() - body.len()];

        let mut lines = Vec::new();
        let mut current = indent.to_string();
        let mut has_word = false;

        for word in body.split(' ').filter(|w| !w.is_empty()) {
            if !has_word {
                current.push_str(word);
                has_word = true;
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if fonts.measure(&candidate, font_name, font_size)? > self.max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }

        if has_word {
            lines.push(current);
        }
        Ok(lines)
    }
}
