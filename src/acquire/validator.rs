//! Upload validation: is this byte blob a usable resume PDF?

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pdf::{PdfBackend, PdfLoader};

/// Verdict of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the document can be processed
    pub valid: bool,
    /// Human-readable explanation
    pub reason: String,
}

impl Validation {
    fn accept(reason: impl Into<String>) -> Self {
        Self {
            valid: true,
            reason: reason.into(),
        }
    }

    fn reject(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: reason.into(),
        }
    }

    /// Whether the document can be processed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Decide whether `data` is a PDF the pipeline can get text out of.
///
/// Never fails: every problem is reported through the returned verdict.
/// The decoded document is dropped before returning on every path.
pub fn validate<L: PdfLoader>(
    loader: &L,
    data: &[u8],
    ocr_available: bool,
    min_text_chars: usize,
) -> Validation {
    if data.is_empty() {
        return Validation::reject("Empty file");
    }

    let backend = match loader.load(data) {
        Ok(backend) => backend,
        Err(Error::Extraction(msg)) => return Validation::reject(format!("Invalid PDF: {}", msg)),
        Err(e) => return Validation::reject(format!("Invalid PDF: {}", e)),
    };

    if backend.page_count() == 0 {
        return Validation::reject("PDF has no pages");
    }

    let first_page = backend.page_text(1).unwrap_or_else(|e| {
        log::debug!("Could not read text layer of first page: {}", e);
        String::new()
    });

    if first_page.trim().chars().count() >= min_text_chars {
        Validation::accept("Valid text-based PDF")
    } else if ocr_available {
        Validation::accept("Valid image-based PDF (will use OCR)")
    } else {
        Validation::reject("PDF appears to be image-based but OCR is not available")
    }
}
