//! Text acquisition options and configuration.

/// Options controlling how text is acquired from a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquireOptions {
    /// Minimum character count of trimmed text for a text layer to count
    /// as usable
    pub min_text_chars: usize,

    /// Linear magnification used when rasterizing pages for OCR
    pub ocr_scale: f32,

    /// OCR language model
    pub ocr_language: String,

    /// Whether to recognize pages in parallel
    pub parallel: bool,

    /// Error handling mode for per-page text layer failures
    pub error_mode: ErrorMode,

    /// Whether the optical fallback may be used at all
    pub ocr_enabled: bool,
}

impl AcquireOptions {
    /// Create new acquisition options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text layer sufficiency threshold.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.min_text_chars = chars;
        self
    }

    /// Set the rasterization magnification.
    pub fn with_ocr_scale(mut self, scale: f32) -> Self {
        self.ocr_scale = scale;
        self
    }

    /// Set the OCR language model.
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Recognize pages one at a time.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Treat unreadable pages as empty (default).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fail when any page's text layer cannot be read.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Never fall back to OCR.
    pub fn without_ocr(mut self) -> Self {
        self.ocr_enabled = false;
        self
    }
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            min_text_chars: 10,
            ocr_scale: 2.0,
            ocr_language: "eng".to_string(),
            parallel: true,
            error_mode: ErrorMode::Lenient,
            ocr_enabled: true,
        }
    }
}

/// Error handling mode for page-level text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page error
    Strict,
    /// Log the failure and treat the page as empty
    #[default]
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_options_builder() {
        let options = AcquireOptions::new()
            .strict()
            .with_min_text_chars(25)
            .with_ocr_scale(3.0)
            .with_ocr_language("eng+deu")
            .sequential()
            .without_ocr();

        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.min_text_chars, 25);
        assert_eq!(options.ocr_scale, 3.0);
        assert_eq!(options.ocr_language, "eng+deu");
        assert!(!options.parallel);
        assert!(!options.ocr_enabled);
    }

    #[test]
    fn test_default_options() {
        let options = AcquireOptions::default();
        assert_eq!(options.min_text_chars, 10);
        assert_eq!(options.ocr_scale, 2.0);
        assert_eq!(options.ocr_language, "eng");
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.parallel);
        assert!(options.ocr_enabled);
    }
}
