//! Letter layout engine
//!
//! Runs the four section renderers in order over one drawing session and
//! finalizes it exactly once. A failed render discards the session; callers
//! never see a partial artifact.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::{debug, info, warn};

use crate::config::RendererConfig;
use crate::error::RendererResult;
use crate::font_registry::FontRegistry;
use crate::image_registry::AssetStore;
use crate::layout::Template;
use crate::pdf_surface::PdfSurface;
use crate::sections::{BodyRenderer, HeaderRenderer, RecipientRenderer, ReferenceRenderer};
use crate::session::Session;
use crate::surface::DrawingSurface;
use crate::types::LetterContent;

/// A finished document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedLetter {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

pub struct LetterLayoutEngine<'a, S: DrawingSurface> {
    session: Session<'a, S>,
}

impl<'a, S: DrawingSurface> LetterLayoutEngine<'a, S> {
    /// Opens the drawing session on `surface`.
    pub fn new(
        surface: S,
        fonts: &'a FontRegistry,
        template: &'a Template,
        assets: &'a AssetStore,
    ) -> Self {
        Self {
            session: Session::new(surface, fonts, template, assets),
        }
    }

    /// Lay out `content` and finish the document.
    pub fn render(mut self, content: &LetterContent) -> RendererResult<RenderedLetter> {
        if let Err(err) = self.draw(content) {
            warn!("Letter {} failed to render: {}", content.letter_number, err);
            self.session.discard();
            return Err(err);
        }

        let page_count = self.session.page_count();
        let bytes = self.session.finish()?;
        info!(
            "Letter {} rendered: {} page(s), {} bytes",
            content.letter_number,
            page_count,
            bytes.len()
        );
        Ok(RenderedLetter { bytes, page_count })
    }

    fn draw(&mut self, content: &LetterContent) -> RendererResult<()> {
        HeaderRenderer::render(&mut self.session, content)?;
        RecipientRenderer::render(&mut self.session, content)?;
        ReferenceRenderer::render(&mut self.session, content)?;
        BodyRenderer::render(&mut self.session, content)
    }
}

/// Render `content` onto any surface with the standard fonts and template.
pub fn render_with<S: DrawingSurface>(
    surface: S,
    content: &LetterContent,
    config: &RendererConfig,
) -> RendererResult<RenderedLetter> {
    let fonts = FontRegistry::standard();
    let template = Template::default();
    let assets = match AssetStore::new(&config.assets_dir) {
        Ok(assets) => assets,
        Err(err) => {
            surface.discard();
            return Err(err);
        }
    };
    LetterLayoutEngine::new(surface, &fonts, &template, &assets).render(content)
}

/// Render `content` to PDF bytes.
pub fn render_letter(content: &LetterContent, config: &RendererConfig) -> RendererResult<RenderedLetter> {
    render_with(PdfSurface::new(), content, config)
}

/// Render `content` to PDF and store it at `path`.
///
/// The bytes go to a temporary file next to `path` that is renamed into
/// place, so `path` only ever holds a complete document. Missing parent
/// directories are created.
pub fn write_letter(
    content: &LetterContent,
    config: &RendererConfig,
    path: &Path,
) -> RendererResult<RenderedLetter> {
    let rendered = render_letter(content, config)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(&rendered.bytes)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!("Wrote {}", path.display());
    Ok(rendered)
}

/// File name used by the letter service: `courrier_YYYYmmddHHMMSS.pdf`.
pub fn default_output_name() -> String {
    format!("courrier_{}.pdf", Local::now().format("%Y%m%d%H%M%S"))
}
