//! Letter renderer
//!
//! Typesets fixed-template administrative letters from a handful of semantic
//! fields. Layout is done in millimetres against an abstract drawing surface;
//! the PDF surface is built on pdf-writer.

mod canvas;
mod unicode_utils;
pub mod body_line;
pub mod config;
pub mod engine;
pub mod error;
pub mod font_metrics;
pub mod font_registry;
pub mod geometry;
pub mod image_registry;
pub mod layout;
pub mod pdf_surface;
pub mod sections;
pub mod session;
pub mod surface;
pub mod text_layout;
pub mod types;

pub use body_line::{classify, BodyLine};
pub use config::RendererConfig;
pub use engine::{default_output_name, render_letter, render_with, write_letter, LetterLayoutEngine, RenderedLetter};
pub use error::{RendererError, RendererResult};
pub use font_registry::FontRegistry;
pub use image_registry::AssetStore;
pub use layout::Template;
pub use pdf_surface::PdfSurface;
pub use surface::{DrawOp, DrawingSurface, RecordingSurface};
pub use text_layout::LineBreaker;
pub use types::{Importance, LetterContent, Rect};
