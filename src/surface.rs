//! Drawing surface abstraction
//!
//! The layout code only ever needs absolute-positioned text, images and
//! lines plus explicit page breaks. Coordinates are millimetres from the
//! bottom-left corner of the page.

use serde::{Deserialize, Serialize};

use crate::error::{RendererError, RendererResult};
use crate::image_registry::ImageAsset;
use crate::types::Rect;

pub trait DrawingSurface {
    /// Draw `text` with its baseline starting at (x, y).
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &str, size: f64)
        -> RendererResult<()>;

    /// Stroke a straight line; `width` is in points.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64)
        -> RendererResult<()>;

    /// Draw an image stretched to `frame`.
    fn draw_image(&mut self, image: &ImageAsset, frame: Rect) -> RendererResult<()>;

    /// Close the current page and start a new one.
    fn show_page(&mut self) -> RendererResult<()>;

    /// Close the last page and produce the finished artifact.
    fn finish(self) -> RendererResult<Vec<u8>>
    where
        Self: Sized;

    /// Drop everything drawn so far without producing an artifact.
    fn discard(self)
    where
        Self: Sized,
    {
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        page: usize,
        x: f64,
        y: f64,
        text: String,
        font: String,
        size: f64,
    },
    Line {
        page: usize,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
    Image {
        page: usize,
        path: String,
        frame: Rect,
    },
    PageBreak {
        page: usize,
    },
}

/// Surface that records every call; its artifact is the JSON op log.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    page: usize,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that reports a drawing failure once `ops` calls have succeeded.
    pub fn failing_after(ops: usize) -> Self {
        Self {
            fail_after: Some(ops),
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Parse an artifact produced by [`DrawingSurface::finish`].
    pub fn parse_log(bytes: &[u8]) -> RendererResult<Vec<DrawOp>> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn record(&mut self, op: DrawOp) -> RendererResult<()> {
        if let Some(limit) = self.fail_after {
            if self.ops.len() >= limit {
                return Err(RendererError::render(format!(
                    "recording surface refused operation {}",
                    self.ops.len() + 1
                )));
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &str, size: f64)
        -> RendererResult<()> {
        let page = self.page;
        self.record(DrawOp::Text {
            page,
            x,
            y,
            text: text.to_string(),
            font: font.to_string(),
            size,
        })
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64)
        -> RendererResult<()> {
        let page = self.page;
        self.record(DrawOp::Line {
            page,
            x1,
            y1,
            x2,
            y2,
            width,
        })
    }

    fn draw_image(&mut self, image: &ImageAsset, frame: Rect) -> RendererResult<()> {
        let page = self.page;
        self.record(DrawOp::Image {
            page,
            path: image.path.display().to_string(),
            frame,
        })
    }

    fn show_page(&mut self) -> RendererResult<()> {
        let page = self.page;
        self.record(DrawOp::PageBreak { page })?;
        self.page += 1;
        Ok(())
    }

    fn finish(self) -> RendererResult<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.ops)?)
    }
}
