//! Thin canvas wrapper around a pdf-writer content stream
//!
//! Works in PDF points. Callers convert from document units first.

use pdf_writer::{Content, Name, Str};

use crate::unicode_utils::unicode_to_winansi;

pub struct PdfCanvas {
    content: Content,
    line_width: Option<f64>,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            line_width: None,
        }
    }

    /// Get content bytes (for finalizing the page)
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== Text =====

    pub fn draw_string(&mut self, font: Name, size: f64, x: f64, y: f64, text: &str) {
        let encoded = unicode_to_winansi(text);
        self.content.begin_text();
        self.content.set_font(font, size as f32);
        self.content.next_line(x as f32, y as f32);
        self.content.show(Str(&encoded));
        self.content.end_text();
    }

    // ===== Lines =====

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        if self.line_width != Some(width) {
            self.content.set_line_width(width as f32);
            self.line_width = Some(width);
        }
        self.content.move_to(x1 as f32, y1 as f32);
        self.content.line_to(x2 as f32, y2 as f32);
        self.content.stroke();
    }

    // ===== Images =====

    /// Paint an image XObject into the box with bottom-left corner (x, y).
    ///
    /// Image space is the unit square, so the transform scales it to the box.
    pub fn draw_image(&mut self, image: Name, x: f64, y: f64, width: f64, height: f64) {
        self.content.save_state();
        self.content
            .transform([width as f32, 0.0, 0.0, height as f32, x as f32, y as f32]);
        self.content.x_object(image);
        self.content.restore_state();
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}
