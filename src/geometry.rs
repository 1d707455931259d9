//! Geometry utilities: unit conversion and frame fitting

use crate::types::Rect;

/// PDF points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// A4 portrait, in millimetres.
pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;

pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

pub fn pt_to_mm(pt: f64) -> f64 {
    pt / PT_PER_MM
}

/// Convert our Rect (mm) to a pdf-writer Rect (pt) spanning the same area.
pub fn rect_to_pdf(rect: &Rect) -> pdf_writer::Rect {
    pdf_writer::Rect::new(
        mm_to_pt(rect.x) as f32,
        mm_to_pt(rect.y) as f32,
        mm_to_pt(rect.right()) as f32,
        mm_to_pt(rect.top()) as f32,
    )
}

/// Largest rectangle with the image's aspect ratio that fits inside `frame`,
/// centred on both axes.
///
/// Degenerate pixel sizes fall back to the full frame.
pub fn fit_preserving_aspect(frame: Rect, width_px: u32, height_px: u32) -> Rect {
    if width_px == 0 || height_px == 0 {
        return frame;
    }
    let scale = (frame.width / width_px as f64).min(frame.height / height_px as f64);
    let width = width_px as f64 * scale;
    let height = height_px as f64 * scale;
    Rect::new(
        frame.center_x() - width / 2.0,
        frame.center_y() - height / 2.0,
        width,
        height,
    )
}
