//! Error types for unresume library.

use std::io;
use thiserror::Error;

/// Result type alias for unresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring or extracting resume content.
///
/// Only [`Error::Extraction`] is meant to abort a parse request. Rendering
/// and recognition failures are absorbed by the optical fallback, and field
/// extractors never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The byte sequence could not be decoded as a PDF.
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    /// The document was rejected before parsing.
    #[error("PDF validation failed: {0}")]
    InvalidDocument(String),

    /// Text layer extraction failed for a single page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Rasterizing a page to an image failed.
    #[error("Page rendering error: {0}")]
    Render(String),

    /// The optical recognition engine failed or is missing.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// The input path does not name a PDF file.
    #[error("Only PDF files are supported. Received: {0}")]
    UnsupportedFile(String),

    /// A skill taxonomy could not be loaded.
    #[error("Skill taxonomy error: {0}")]
    Taxonomy(String),

    /// Error serializing output.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::Extraction(err.to_string())
    }
}
