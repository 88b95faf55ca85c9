//! Text acquisition: embedded text layer first, OCR when it is missing.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::ocr::{TesseractRecognizer, TextRecognizer};
use crate::pdf::{LopdfLoader, PdfBackend, PdfLoader};

use super::options::{AcquireOptions, ErrorMode};
use super::validator::{self, Validation};

/// Separator inserted between consecutive pages.
pub const PAGE_BREAK: &str = "\n\n--- Page Break ---\n\n";

/// Where acquired text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// The embedded text layer was sufficient
    TextLayer,
    /// Text was recovered by optical recognition
    Ocr,
    /// Neither path produced any text
    Empty,
}

/// Text acquired from one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredText {
    /// Normalized, trimmed document text with page-break markers
    pub text: String,
    /// Which path produced the text
    pub source: TextSource,
    /// Number of pages in the document
    pub page_count: u32,
}

/// Acquisition pipeline: validation, text layer extraction and the optical
/// fallback over a pluggable PDF loader and recognizer.
///
/// OCR availability is probed once, at construction.
///
/// # Example
///
/// ```no_run
/// use unresume::acquire::TextAcquisition;
///
/// let pipeline = TextAcquisition::new();
/// let data = std::fs::read("resume.pdf")?;
/// if pipeline.validate(&data).is_valid() {
///     println!("{}", pipeline.extract_text(&data)?);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct TextAcquisition<L = LopdfLoader, R = TesseractRecognizer> {
    loader: L,
    recognizer: R,
    options: AcquireOptions,
    ocr_available: bool,
}

impl TextAcquisition {
    /// Create a pipeline over lopdf, pdftoppm and tesseract.
    pub fn new() -> Self {
        Self::with_options(AcquireOptions::default())
    }

    /// Create a pipeline over lopdf, pdftoppm and tesseract with options.
    pub fn with_options(options: AcquireOptions) -> Self {
        Self::with_components(LopdfLoader::new(), TesseractRecognizer::new(), options)
    }
}

impl Default for TextAcquisition {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R> TextAcquisition<L, R>
where
    L: PdfLoader + Sync,
    R: TextRecognizer + Sync,
{
    /// Assemble a pipeline from explicit collaborators.
    pub fn with_components(loader: L, recognizer: R, options: AcquireOptions) -> Self {
        let ocr_available = options.ocr_enabled && probe_ocr(&loader, &recognizer);
        Self {
            loader,
            recognizer,
            options,
            ocr_available,
        }
    }

    /// Whether the optical fallback can run.
    pub fn ocr_available(&self) -> bool {
        self.ocr_available
    }

    /// Options this pipeline was built with.
    pub fn options(&self) -> &AcquireOptions {
        &self.options
    }

    /// Check whether `data` is a usable PDF. Never fails.
    pub fn validate(&self, data: &[u8]) -> Validation {
        validator::validate(
            &self.loader,
            data,
            self.ocr_available,
            self.options.min_text_chars,
        )
    }

    /// Extract the document's text, falling back to OCR when the text
    /// layer is missing or too short.
    ///
    /// Fails only when `data` cannot be decoded as a PDF.
    pub fn extract_text(&self, data: &[u8]) -> Result<String> {
        self.acquire(data).map(|acquired| acquired.text)
    }

    /// Like [`extract_text`](Self::extract_text), also reporting where the
    /// text came from.
    pub fn acquire(&self, data: &[u8]) -> Result<AcquiredText> {
        let backend = self.loader.load(data).map_err(as_extraction_failure)?;
        let page_count = backend.page_count();

        let layer = self.text_layer(&backend)?;
        if self.is_sufficient(&layer) {
            return Ok(AcquiredText {
                text: normalize(&layer),
                source: TextSource::TextLayer,
                page_count,
            });
        }

        log::info!("Insufficient text layer, falling back to OCR");
        let text = normalize(&self.ocr_text(&backend));
        let source = if text.is_empty() {
            TextSource::Empty
        } else {
            TextSource::Ocr
        };
        Ok(AcquiredText {
            text,
            source,
            page_count,
        })
    }

    /// Concatenate every page's embedded text, pages separated by
    /// [`PAGE_BREAK`].
    pub fn text_layer(&self, backend: &L::Backend) -> Result<String> {
        Ok(self.text_layer_pages(backend)?.join(PAGE_BREAK))
    }

    fn text_layer_pages(&self, backend: &L::Backend) -> Result<Vec<String>> {
        (1..=backend.page_count())
            .map(|page| match backend.page_text(page) {
                Ok(text) => Ok(text),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping text layer of page {}: {}", page, e);
                    Ok(String::new())
                }
                Err(e) => Err(e),
            })
            .collect()
    }

    /// Recognize every page, pages separated by [`PAGE_BREAK`].
    ///
    /// Any failure yields an empty string: OCR never aborts acquisition.
    pub fn ocr_text(&self, backend: &L::Backend) -> String {
        if !self.ocr_available {
            log::debug!("OCR unavailable, no text recovered");
            return String::new();
        }

        let total = backend.page_count();
        log::info!("Using OCR to extract text from {} page(s)", total);

        let pages: Result<Vec<String>> = if self.options.parallel {
            (1..=total)
                .into_par_iter()
                .map(|page| self.ocr_page(backend, page, total))
                .collect()
        } else {
            (1..=total)
                .map(|page| self.ocr_page(backend, page, total))
                .collect()
        };

        match pages {
            Ok(pages) => {
                log::info!("OCR extraction completed");
                pages.join(PAGE_BREAK).trim().to_string()
            }
            Err(e) => {
                log::warn!("OCR extraction failed: {}", e);
                String::new()
            }
        }
    }

    fn ocr_page(&self, backend: &L::Backend, page: u32, total: u32) -> Result<String> {
        log::debug!("OCR page {}/{}", page, total);
        let image = backend.render_page(page, self.options.ocr_scale)?;
        self.recognizer.recognize(&image, &self.options.ocr_language)
    }

    /// Measured on the joined layer, markers included.
    fn is_sufficient(&self, layer: &str) -> bool {
        layer.trim().chars().count() >= self.options.min_text_chars
    }
}

fn probe_ocr<L: PdfLoader, R: TextRecognizer>(loader: &L, recognizer: &R) -> bool {
    let probe = loader.probe_renderer().and_then(|_| recognizer.probe());
    match probe {
        Ok(version) => {
            log::debug!("OCR enabled ({})", version);
            true
        }
        Err(e) => {
            log::warn!("OCR will be disabled: {}", e);
            false
        }
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_string()
}

fn as_extraction_failure(err: Error) -> Error {
    match err {
        Error::Extraction(_) => err,
        other => Error::Extraction(other.to_string()),
    }
}
