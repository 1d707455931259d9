//! PDF drawing surface built on pdf-writer
//!
//! Pages are A4 unless told otherwise. Each page's content stream and page
//! object are written when the page is closed, so its resources list every
//! image it actually used. Nothing touches the filesystem: the finished
//! document is returned as bytes.

use std::collections::HashMap;
use std::path::PathBuf;

use image::DynamicImage;
use log::{debug, info, warn};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

use crate::canvas::PdfCanvas;
use crate::error::{RendererError, RendererResult};
use crate::font_registry::{FONT_BOLD, FONT_REGULAR};
use crate::geometry::{mm_to_pt, rect_to_pdf, A4_HEIGHT_MM, A4_WIDTH_MM};
use crate::image_registry::{ImageAsset, ImageKind, JpegColor};
use crate::surface::DrawingSurface;
use crate::types::Rect;
use crate::unicode_utils::is_winansi;

/// Built-in Type1 fonts: logical name → (resource name, base font)
const BUILTIN_FONTS: [(&str, Name<'static>, Name<'static>); 2] = [
    (FONT_REGULAR, Name(b"F1"), Name(b"Times-Roman")),
    (FONT_BOLD, Name(b"F2"), Name(b"Times-Bold")),
];

struct OpenPage {
    page_id: Ref,
    content_id: Ref,
    canvas: PdfCanvas,
    // (resource name, xobject id)
    images: Vec<(String, Ref)>,
}

pub struct PdfSurface {
    pdf: Pdf,
    page_tree_id: Ref,
    next_ref_id: i32,
    page_size: Rect,
    pages: Vec<Ref>,
    current: Option<OpenPage>,
    fonts: Vec<(&'static str, Name<'static>, Ref)>,
    images: HashMap<PathBuf, (String, Ref)>,
}

impl PdfSurface {
    /// Open a document with one empty A4 page.
    pub fn new() -> Self {
        Self::with_page_size(A4_WIDTH_MM, A4_HEIGHT_MM)
    }

    /// Page size in millimetres.
    pub fn with_page_size(width: f64, height: f64) -> Self {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        pdf.catalog(catalog_id).pages(page_tree_id);

        let mut next_ref_id = 3;
        let mut fonts = Vec::with_capacity(BUILTIN_FONTS.len());
        for (logical, resource, base_font) in BUILTIN_FONTS {
            let font_id = Ref::new(next_ref_id);
            next_ref_id += 1;
            pdf.type1_font(font_id)
                .base_font(base_font)
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            fonts.push((logical, resource, font_id));
        }

        let mut surface = Self {
            pdf,
            page_tree_id,
            next_ref_id,
            page_size: Rect::new(0.0, 0.0, width, height),
            pages: Vec::new(),
            current: None,
            fonts,
            images: HashMap::new(),
        };
        surface.open_page();
        surface
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn next_ref(&mut self) -> Ref {
        let r = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        r
    }

    fn open_page(&mut self) {
        let page_id = self.next_ref();
        let content_id = self.next_ref();
        self.pages.push(page_id);
        self.current = Some(OpenPage {
            page_id,
            content_id,
            canvas: PdfCanvas::new(),
            images: Vec::new(),
        });
    }

    fn close_page(&mut self) {
        let Some(open) = self.current.take() else {
            return;
        };
        let content = open.canvas.finish();
        self.pdf.stream(open.content_id, &content);

        let mut page = self.pdf.page(open.page_id);
        page.media_box(rect_to_pdf(&self.page_size));
        page.parent(self.page_tree_id);
        page.contents(open.content_id);
        {
            let mut resources = page.resources();
            {
                let mut fonts = resources.fonts();
                for (_, name, id) in &self.fonts {
                    fonts.pair(*name, *id);
                }
            }
            if !open.images.is_empty() {
                let mut x_objects = resources.x_objects();
                for (name, id) in &open.images {
                    x_objects.pair(Name(name.as_bytes()), *id);
                }
            }
        }
        page.finish();
        debug!("Closed page {} ({} bytes of content)", self.pages.len(), content.len());
    }

    fn canvas(&mut self) -> RendererResult<&mut OpenPage> {
        self.current
            .as_mut()
            .ok_or_else(|| RendererError::render("no open page"))
    }

    fn font_resource(&self, font: &str) -> RendererResult<Name<'static>> {
        self.fonts
            .iter()
            .find(|(logical, _, _)| *logical == font)
            .map(|(_, name, _)| *name)
            .ok_or_else(|| RendererError::configuration(format!("font not available in PDF: {}", font)))
    }

    /// Get or create the image XObject for an asset.
    fn image_resource(&mut self, image: &ImageAsset) -> RendererResult<(String, Ref)> {
        if let Some(existing) = self.images.get(&image.path) {
            return Ok(existing.clone());
        }

        let image_id = self.next_ref();
        match image.kind {
            ImageKind::Jpeg(color) => {
                let mut xobject = self.pdf.image_xobject(image_id, &image.data);
                xobject.filter(Filter::DctDecode);
                xobject.width(image.width as i32);
                xobject.height(image.height as i32);
                match color {
                    JpegColor::Gray => {
                        xobject.color_space().device_gray();
                    }
                    JpegColor::Rgb => {
                        xobject.color_space().device_rgb();
                    }
                    JpegColor::Cmyk => {
                        xobject.color_space().device_cmyk();
                    }
                }
                xobject.bits_per_component(8);
            }
            ImageKind::Raster => {
                let decoded = image::load_from_memory(&image.data).map_err(|e| {
                    RendererError::configuration(format!(
                        "failed to decode image {}: {}",
                        image.path.display(),
                        e
                    ))
                })?;
                self.write_raster(image_id, &decoded);
            }
        }

        let name = format!("Im{}", self.images.len() + 1);
        debug!("Embedded {} as {}", image.path.display(), name);
        self.images
            .insert(image.path.clone(), (name.clone(), image_id));
        Ok((name, image_id))
    }

    /// RGB samples, with the alpha channel split off into a soft mask.
    fn write_raster(&mut self, image_id: Ref, decoded: &DynamicImage) {
        let has_alpha = decoded.color().has_alpha();
        let (samples, alpha, width, height) = if has_alpha {
            let rgba = decoded.to_rgba8();
            let (w, h) = rgba.dimensions();
            let mut rgb = Vec::with_capacity((w * h * 3) as usize);
            let mut alpha = Vec::with_capacity((w * h) as usize);
            for chunk in rgba.as_raw().chunks_exact(4) {
                rgb.extend_from_slice(&chunk[..3]);
                alpha.push(chunk[3]);
            }
            (rgb, Some(alpha), w, h)
        } else {
            let rgb = decoded.to_rgb8();
            let (w, h) = rgb.dimensions();
            (rgb.into_raw(), None, w, h)
        };

        let smask_id = alpha.map(|alpha| {
            let smask_id = self.next_ref();
            let mut smask = self.pdf.image_xobject(smask_id, &alpha);
            smask.width(width as i32);
            smask.height(height as i32);
            smask.color_space().device_gray();
            smask.bits_per_component(8);
            smask_id
        });

        let mut xobject = self.pdf.image_xobject(image_id, &samples);
        xobject.width(width as i32);
        xobject.height(height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        if let Some(smask_id) = smask_id {
            xobject.s_mask(smask_id);
        }
    }
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for PdfSurface {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &str, size: f64)
        -> RendererResult<()> {
        let font = self.font_resource(font)?;
        if !is_winansi(text) {
            warn!("Characters outside WinAnsi replaced with '?': {}", text);
        }
        self.canvas()?
            .canvas
            .draw_string(font, size, mm_to_pt(x), mm_to_pt(y), text);
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64)
        -> RendererResult<()> {
        self.canvas()?
            .canvas
            .line(mm_to_pt(x1), mm_to_pt(y1), mm_to_pt(x2), mm_to_pt(y2), width);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageAsset, frame: Rect) -> RendererResult<()> {
        let (name, image_id) = self.image_resource(image)?;
        let page = self.canvas()?;
        page.canvas.draw_image(
            Name(name.as_bytes()),
            mm_to_pt(frame.x),
            mm_to_pt(frame.y),
            mm_to_pt(frame.width),
            mm_to_pt(frame.height),
        );
        if !page.images.iter().any(|(used, _)| *used == name) {
            page.images.push((name, image_id));
        }
        Ok(())
    }

    fn show_page(&mut self) -> RendererResult<()> {
        self.close_page();
        self.open_page();
        Ok(())
    }

    fn finish(mut self) -> RendererResult<Vec<u8>> {
        self.close_page();
        let page_count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(page_count);

        let bytes = self.pdf.finish();
        info!(
            "PDF generated: {} pages, {} bytes ({:.2} MB)",
            page_count,
            bytes.len(),
            bytes.len() as f64 / 1_048_576.0
        );
        Ok(bytes)
    }

    fn discard(self) {
        debug!("Discarding unfinished PDF ({} pages opened)", self.pages.len());
    }
}

#[cfg(test)]
mod tests {
    // Not `super::*`: pdf_writer::Finish would shadow DrawingSurface::finish
    use super::PdfSurface;
    use crate::font_registry::{FONT_BOLD, FONT_REGULAR};
    use crate::image_registry::ImageAsset;
    use crate::surface::DrawingSurface;
    use crate::types::Rect;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let surface = PdfSurface::new();
        assert_eq!(surface.page_count(), 1);
        let bytes = surface.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"/MediaBox"), 1);
    }

    #[test]
    fn test_show_page_adds_pages() {
        let mut surface = PdfSurface::new();
        surface.draw_text(25.0, 180.0, "N° 231 /MEF/SG/DGI/SSIF", FONT_REGULAR, 11.0).unwrap();
        surface.show_page().unwrap();
        surface.draw_text(25.0, 270.0, "suite", FONT_BOLD, 11.0).unwrap();
        assert_eq!(surface.page_count(), 2);
        let bytes = surface.finish().unwrap();
        assert!(count(&bytes, b"/Count 2") >= 1);
        assert!(count(&bytes, b"/WinAnsiEncoding") >= 2);
        assert!(count(&bytes, b"/Times-Bold") >= 1);
    }

    #[test]
    fn test_unknown_font_rejected() {
        let mut surface = PdfSurface::new();
        let err = surface.draw_text(0.0, 0.0, "x", "Courier", 11.0).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_image_embedded_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo_mef.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();
        let asset = ImageAsset::load(&path).unwrap();

        let mut surface = PdfSurface::new();
        let frame = Rect::new(35.0, 235.0, 22.0, 22.0);
        surface.draw_image(&asset, frame).unwrap();
        surface.show_page().unwrap();
        surface.draw_image(&asset, frame).unwrap();
        let bytes = surface.finish().unwrap();
        // One image plus its soft mask
        assert_eq!(count(&bytes, b"/Subtype /Image"), 2);
        assert!(count(&bytes, b"/SMask") >= 1);
    }

    #[test]
    fn test_jpeg_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo_republic.jpg");
        image::RgbImage::new(6, 3).save(&path).unwrap();
        let asset = ImageAsset::load(&path).unwrap();

        let mut surface = PdfSurface::new();
        surface.draw_image(&asset, Rect::new(92.5, 270.0, 25.0, 20.0)).unwrap();
        let bytes = surface.finish().unwrap();
        assert_eq!(count(&bytes, b"/DCTDecode"), 1);
    }
}
