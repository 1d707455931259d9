//! Error types for the letter renderer
//!
//! Every failure is fatal for the render it happens in: nothing is retried and
//! no partially drawn artifact is handed back to the caller.

use thiserror::Error;

/// Custom error type for letter rendering operations
#[derive(Error, Debug)]
pub enum RendererError {
    /// Unknown font, or an asset path that exists but cannot be used.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The drawing collaborator failed mid-document.
    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(String),
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for RendererError {
    fn from(err: serde_json::Error) -> Self {
        RendererError::Json(err.to_string())
    }
}

impl RendererError {
    pub fn configuration(message: impl Into<String>) -> Self {
        RendererError::Configuration(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        RendererError::Render(message.into())
    }

    /// True for the errors raised before anything was drawn.
    pub fn is_configuration(&self) -> bool {
        matches!(self, RendererError::Configuration(_))
    }
}
