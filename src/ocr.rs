//! Optical character recognition.
//!
//! The default engine shells out to the `tesseract` command line tool. Any
//! engine can be plugged into the acquisition pipeline through
//! [`TextRecognizer`].

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};
use crate::pdf::RasterImage;

/// Recognizes text in rendered page images.
pub trait TextRecognizer {
    /// Check that the engine is usable, returning a version or identity string.
    fn probe(&self) -> Result<String>;

    /// Recognize the text in `image` using the given language model.
    fn recognize(&self, image: &RasterImage, language: &str) -> Result<String>;
}

/// [`TextRecognizer`] backed by the `tesseract` executable.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    binary: PathBuf,
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
        }
    }
}

impl TesseractRecognizer {
    /// Create a recognizer using `tesseract` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `tesseract` executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn probe(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .output()
            .map_err(|e| Error::Ocr(format!("{} not found: {}", self.binary.display(), e)))?;

        if !output.status.success() {
            return Err(Error::Ocr(format!(
                "{} --version exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        // Older releases print the banner on stderr.
        let banner = if output.stdout.is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        let version = String::from_utf8_lossy(&banner)
            .lines()
            .next()
            .unwrap_or("tesseract")
            .trim()
            .to_string();
        Ok(version)
    }

    fn recognize(&self, image: &RasterImage, language: &str) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg(image.path())
            .arg("stdout")
            .arg("-l")
            .arg(language)
            .output()
            .map_err(|e| {
                Error::Ocr(format!(
                    "Failed to run tesseract on page {}: {}",
                    image.page(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!(
                "tesseract failed on page {}: {}",
                image.page(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_missing_binary() {
        let recognizer = TesseractRecognizer::new().with_binary("/nonexistent/bin/tesseract");
        assert!(matches!(recognizer.probe(), Err(Error::Ocr(_))));
    }

    #[test]
    fn test_recognize_missing_binary() {
        let recognizer = TesseractRecognizer::new().with_binary("/nonexistent/bin/tesseract");
        let image = RasterImage::from_png(1, b"\x89PNG\r\n\x1a\n").unwrap();
        let err = recognizer.recognize(&image, "eng").unwrap_err();
        assert!(err.to_string().contains("page 1"));
    }
}
