//! Error types for story generation

use thiserror::Error;

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, rendering or exporting stories
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to fetch a word-list resource
    #[error("Failed to load resource: {0}")]
    LoadError(String),

    /// A fetched resource did not have the expected shape
    #[error("Failed to decode resource: {0}")]
    DecodeError(String),

    /// Generation was requested before both word lists were populated
    #[error("Adjective and noun lists are not loaded.")]
    ListsNotLoaded,

    /// Failed to rasterize or encode the canvas
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Export was requested before any story was generated
    #[error("No story has been generated yet; nothing to export")]
    NothingToExport,

    /// Failed to hand the image to the export sink
    #[error("Export failed: {0}")]
    ExportError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Reading session commands or writing replies failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::RenderError(err.to_string())
    }
}
