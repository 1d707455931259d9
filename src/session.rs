//! Drawing session shared by the section renderers
//!
//! A `Session` bundles the drawing surface with the read-only collaborators a
//! render needs (fonts, template, assets) and the vertical write cursor. It is
//! created for one document and consumed when the document is finished or
//! discarded.

use log::debug;

use crate::error::RendererResult;
use crate::font_registry::FontRegistry;
use crate::geometry::fit_preserving_aspect;
use crate::image_registry::AssetStore;
use crate::layout::{EmblemSlot, Placement, Template};
use crate::surface::DrawingSurface;
use crate::text_layout::LineBreaker;

/// Vertical write cursor and page index for body typesetting.
///
/// The cursor is a baseline in millimetres from the bottom of the page, so
/// advancing moves it down (decreases it).
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationController {
    cursor: f64,
    page_index: usize,
    continuation_top: f64,
}

impl PaginationController {
    pub fn new(start: f64, continuation_top: f64) -> Self {
        Self {
            cursor: start,
            page_index: 0,
            continuation_top,
        }
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn continuation_top(&self) -> f64 {
        self.continuation_top
    }

    /// Move the cursor down the page by `delta`.
    pub fn advance(&mut self, delta: f64) {
        self.cursor -= delta;
    }

    /// Start a new page when the cursor is below `threshold`.
    ///
    /// Returns whether a break happened.
    pub fn check_break<S: DrawingSurface>(
        &mut self,
        threshold: f64,
        surface: &mut S,
    ) -> RendererResult<bool> {
        if self.cursor >= threshold {
            return Ok(false);
        }
        surface.show_page()?;
        self.cursor = self.continuation_top;
        self.page_index += 1;
        debug!("Page break, now on page {}", self.page_index + 1);
        Ok(true)
    }
}

pub struct Session<'a, S: DrawingSurface> {
    surface: S,
    fonts: &'a FontRegistry,
    template: &'a Template,
    assets: &'a AssetStore,
    pagination: PaginationController,
}

impl<'a, S: DrawingSurface> Session<'a, S> {
    /// The cursor starts on the greeting baseline.
    pub fn new(
        surface: S,
        fonts: &'a FontRegistry,
        template: &'a Template,
        assets: &'a AssetStore,
    ) -> Self {
        let pagination =
            PaginationController::new(template.body.greeting.y, template.body.continuation_top);
        Self {
            surface,
            fonts,
            template,
            assets,
            pagination,
        }
    }

    pub fn template(&self) -> &'a Template {
        self.template
    }

    pub fn fonts(&self) -> &'a FontRegistry {
        self.fonts
    }

    pub fn measure(&self, text: &str, font: &str, size: f64) -> RendererResult<f64> {
        self.fonts.measure(text, font, size)
    }

    // ===== Drawing =====

    pub fn text(&mut self, x: f64, y: f64, text: &str, font: &str, size: f64) -> RendererResult<()> {
        // Fail on unknown fonts before the surface sees the call
        self.fonts.get(font)?;
        self.surface.draw_text(x, y, text, font, size)
    }

    pub fn placed(&mut self, placement: &Placement, text: &str) -> RendererResult<()> {
        self.text(placement.x, placement.y, text, placement.font, placement.size)
    }

    /// Draw `text` horizontally centred on the placement's x.
    pub fn centred(&mut self, placement: &Placement, text: &str) -> RendererResult<()> {
        let width = self.measure(text, placement.font, placement.size)?;
        self.text(
            placement.x - width / 2.0,
            placement.y,
            text,
            placement.font,
            placement.size,
        )
    }

    /// Wrap `text` to the placement's width and draw the lines downward from
    /// its baseline, `line_height` apart. Returns the number of lines drawn.
    ///
    /// Does not move the cursor.
    pub fn wrapped(
        &mut self,
        placement: &Placement,
        text: &str,
        line_height: f64,
    ) -> RendererResult<usize> {
        let lines = LineBreaker::new(placement.width).break_text(
            text,
            placement.font,
            placement.size,
            self.fonts,
        )?;
        for (i, line) in lines.iter().enumerate() {
            let y = placement.y - i as f64 * line_height;
            self.surface
                .draw_text(placement.x, y, line, placement.font, placement.size)?;
        }
        Ok(lines.len())
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) -> RendererResult<()> {
        self.surface.draw_line(x1, y1, x2, y2, width)
    }

    /// Draw the emblem for `slot` if one is installed. Returns whether it was drawn.
    pub fn emblem(&mut self, slot: &EmblemSlot) -> RendererResult<bool> {
        let Some(image) = self.assets.load_emblem(slot)? else {
            return Ok(false);
        };
        let frame = fit_preserving_aspect(slot.frame, image.width, image.height);
        self.surface.draw_image(&image, frame)?;
        Ok(true)
    }

    // ===== Cursor =====

    pub fn cursor(&self) -> f64 {
        self.pagination.cursor()
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index()
    }

    pub fn advance(&mut self, delta: f64) {
        self.pagination.advance(delta);
    }

    pub fn check_break(&mut self, threshold: f64) -> RendererResult<bool> {
        self.pagination.check_break(threshold, &mut self.surface)
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.pagination.page_index() + 1
    }

    // ===== Lifecycle =====

    pub fn finish(self) -> RendererResult<Vec<u8>> {
        self.surface.finish()
    }

    pub fn discard(self) {
        self.surface.discard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_registry::{FONT_BOLD, FONT_REGULAR};
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn test_advance_moves_down() {
        let mut pagination = PaginationController::new(145.0, 270.0);
        pagination.advance(5.0);
        pagination.advance(6.0);
        assert_eq!(pagination.cursor(), 134.0);
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn test_break_resets_to_continuation_top() {
        let mut surface = RecordingSurface::new();
        let mut pagination = PaginationController::new(145.0, 270.0);

        let mut breaks = 0;
        for _ in 0..100 {
            pagination.advance(5.0);
            if pagination.check_break(20.0, &mut surface).unwrap() {
                breaks += 1;
                assert_eq!(pagination.cursor(), pagination.continuation_top());
                assert_eq!(pagination.cursor(), 270.0);
            }
        }
        assert!(breaks >= 1);
        assert_eq!(pagination.page_index(), breaks);
        let page_breaks = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::PageBreak { .. }))
            .count();
        assert_eq!(page_breaks, breaks);
    }

    #[test]
    fn test_no_break_at_threshold() {
        let mut surface = RecordingSurface::new();
        let mut pagination = PaginationController::new(25.0, 270.0);
        pagination.advance(5.0);
        assert!(!pagination.check_break(20.0, &mut surface).unwrap());
        pagination.advance(0.5);
        assert!(pagination.check_break(20.0, &mut surface).unwrap());
        assert_eq!(pagination.cursor(), 270.0);
        assert_eq!(pagination.page_index(), 1);
    }

    #[test]
    fn test_centred_text_straddles_x() {
        let fonts = FontRegistry::standard();
        let template = Template::default();
        let assets = AssetStore::empty();
        let mut session = Session::new(RecordingSurface::new(), &fonts, &template, &assets);

        let placement = Placement::at(105.0, 266.0, FONT_BOLD, 9.0);
        session.centred(&placement, "REPOBLIKAN'I MADAGASIKARA").unwrap();
        let width = fonts.measure("REPOBLIKAN'I MADAGASIKARA", FONT_BOLD, 9.0).unwrap();

        let bytes = session.finish().unwrap();
        let ops = RecordingSurface::parse_log(&bytes).unwrap();
        match &ops[0] {
            DrawOp::Text { x, .. } => assert!((x + width / 2.0 - 105.0).abs() < 1e-9),
            other => panic!("unexpected op {:?}", other),
        }
    }

    #[test]
    fn test_wrapped_text_steps_down() {
        let fonts = FontRegistry::standard();
        let template = Template::default();
        let assets = AssetStore::empty();
        let mut session = Session::new(RecordingSurface::new(), &fonts, &template, &assets);

        let placement = Placement::new(120.0, 200.0, 40.0, FONT_REGULAR, 10.0);
        let count = session
            .wrapped(&placement, "MONSIEUR LE CHEF DU SERVICE REGIONAL DES ENTREPRISES", 5.0)
            .unwrap();
        assert!(count >= 2);
        // Wrapping never touches the cursor
        assert_eq!(session.cursor(), template.body.greeting.y);

        let bytes = session.finish().unwrap();
        let ys: Vec<f64> = RecordingSurface::parse_log(&bytes)
            .unwrap()
            .into_iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(y),
                _ => None,
            })
            .collect();
        assert_eq!(ys.len(), count);
        assert_eq!(ys[0], 200.0);
        assert_eq!(ys[1], 195.0);
    }

    #[test]
    fn test_unknown_font_fails_before_drawing() {
        let fonts = FontRegistry::standard();
        let template = Template::default();
        let assets = AssetStore::empty();
        let mut session = Session::new(RecordingSurface::new(), &fonts, &template, &assets);
        let err = session.text(0.0, 0.0, "x", "Helvetica", 11.0).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_emblem_is_skipped() {
        let fonts = FontRegistry::standard();
        let template = Template::default();
        let assets = AssetStore::empty();
        let mut session = Session::new(RecordingSurface::new(), &fonts, &template, &assets);
        assert!(!session.emblem(&template.header.ministry_emblem).unwrap());
        let bytes = session.finish().unwrap();
        assert!(RecordingSurface::parse_log(&bytes).unwrap().is_empty());
    }
}
