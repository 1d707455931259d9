//! Emblem assets: lookup under the assets directory and header inspection
//!
//! Emblems are optional. A slot whose candidate files are all absent resolves
//! to `None`; a file that exists but cannot be read or decoded is a
//! configuration error.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::ImageFormat;
use log::{debug, warn};

use crate::error::{RendererError, RendererResult};
use crate::layout::EmblemSlot;

/// Colour model of a JPEG that is embedded without re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegColor {
    Gray,
    Rgb,
    Cmyk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// Passed through to the output as DCT data.
    Jpeg(JpegColor),
    /// Decoded and embedded as raw samples.
    Raster,
}

/// A loaded emblem file.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub kind: ImageKind,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    pub fn load(path: &Path) -> RendererResult<Self> {
        let data = std::fs::read(path).map_err(|e| {
            RendererError::configuration(format!("failed to read image {}: {}", path.display(), e))
        })?;
        Self::from_bytes(path.to_path_buf(), data)
    }

    pub fn from_bytes(path: PathBuf, data: Vec<u8>) -> RendererResult<Self> {
        let is_jpeg = matches!(image::guess_format(&data), Ok(ImageFormat::Jpeg));
        let (kind, width, height) = if is_jpeg {
            inspect_jpeg(&path, &data)?
        } else {
            let (width, height) = ImageReader::new(Cursor::new(&data))
                .with_guessed_format()
                .map_err(|e| invalid_image(&path, e))?
                .into_dimensions()
                .map_err(|e| invalid_image(&path, e))?;
            (ImageKind::Raster, width, height)
        };

        debug!("Loaded image {} ({}x{}, {:?})", path.display(), width, height, kind);
        Ok(Self {
            path,
            data,
            kind,
            width,
            height,
        })
    }
}

fn inspect_jpeg(path: &Path, data: &[u8]) -> RendererResult<(ImageKind, u32, u32)> {
    let mut decoder = jpeg_decoder::Decoder::new(Cursor::new(data));
    decoder.read_info().map_err(|e| invalid_image(path, e))?;
    let info = decoder
        .info()
        .ok_or_else(|| invalid_image(path, "missing JPEG header"))?;
    let color = match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => JpegColor::Gray,
        jpeg_decoder::PixelFormat::RGB24 => JpegColor::Rgb,
        jpeg_decoder::PixelFormat::CMYK32 => JpegColor::Cmyk,
        other => {
            return Err(invalid_image(path, format!("unsupported JPEG pixel format {:?}", other)))
        }
    };
    Ok((ImageKind::Jpeg(color), info.width as u32, info.height as u32))
}

fn invalid_image(path: &Path, err: impl std::fmt::Display) -> RendererError {
    RendererError::configuration(format!("invalid image {}: {}", path.display(), err))
}

/// Read-only view of the assets directory.
pub struct AssetStore {
    root: Option<PathBuf>,
}

impl AssetStore {
    /// A missing directory only disables emblems; a path that is not a
    /// directory is rejected.
    pub fn new(root: impl Into<PathBuf>) -> RendererResult<Self> {
        let root = root.into();
        if !root.exists() {
            warn!("Assets directory {} not found, emblems will be skipped", root.display());
            return Ok(Self { root: None });
        }
        if !root.is_dir() {
            return Err(RendererError::configuration(format!(
                "assets path is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root: Some(root) })
    }

    /// Store without any assets; every emblem is skipped.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// First candidate that exists on disk.
    pub fn find(&self, candidates: &[&str]) -> Option<PathBuf> {
        let root = self.root.as_ref()?;
        candidates
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.is_file())
    }

    pub fn load_emblem(&self, slot: &EmblemSlot) -> RendererResult<Option<ImageAsset>> {
        match self.find(&slot.candidates) {
            Some(path) => ImageAsset::load(&path).map(Some),
            None => {
                debug!("No emblem found among {:?}, skipping", slot.candidates);
                Ok(None)
            }
        }
    }
}
