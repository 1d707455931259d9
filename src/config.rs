//! Renderer configuration
//!
//! The library takes a `RendererConfig` value explicitly. Only the binary
//! reads it from the environment.

use std::path::PathBuf;

use serde::Deserialize;

pub const ASSETS_DIR_VAR: &str = "LETTER_ASSETS_DIR";
pub const OUTPUT_DIR_VAR: &str = "LETTER_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Directory holding the emblem images. May be absent.
    pub assets_dir: PathBuf,
    /// Where letters are written when no explicit path is given.
    pub output_dir: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("generated_pdfs"),
        }
    }
}

impl RendererConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            assets_dir: lookup(ASSETS_DIR_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            output_dir: lookup(OUTPUT_DIR_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
