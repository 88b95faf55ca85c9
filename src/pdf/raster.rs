//! Page rasterization for the optical fallback.
//!
//! Pages are rendered with `pdftoppm` (poppler-utils) into a private
//! temporary directory owned by the resulting [`RasterImage`].

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::error::{Error, Result};

/// Resolution of PDF user space at 1.0x magnification.
const BASE_DPI: f32 = 72.0;

/// A rendered page image.
///
/// The image file lives in its own temporary directory, which is deleted
/// when the value is dropped.
#[derive(Debug)]
pub struct RasterImage {
    page: u32,
    path: PathBuf,
    _dir: TempDir,
}

impl RasterImage {
    /// Wrap already-encoded PNG data for a page.
    pub fn from_png(page: u32, png: &[u8]) -> Result<Self> {
        let dir = scratch_dir()?;
        let path = dir.path().join(format!("page-{}.png", page));
        fs::write(&path, png)?;
        Ok(Self {
            page,
            path,
            _dir: dir,
        })
    }

    /// Page number (1-indexed) this image was rendered from.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Location of the PNG file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn scratch_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("unresume-").tempdir()?)
}

/// Renders PDF pages to PNG with poppler's `pdftoppm`.
#[derive(Debug, Clone)]
pub struct PopplerRasterizer {
    binary: PathBuf,
}

impl Default for PopplerRasterizer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("pdftoppm"),
        }
    }
}

impl PopplerRasterizer {
    /// Create a rasterizer using `pdftoppm` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `pdftoppm` executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Check that the executable can be launched.
    pub fn probe(&self) -> Result<()> {
        // Older poppler releases exit non-zero for -v, so only spawning matters.
        Command::new(&self.binary).arg("-v").output().map_err(|e| {
            Error::Render(format!("{} is not available: {}", self.binary.display(), e))
        })?;
        log::debug!("pdftoppm found at {}", self.binary.display());
        Ok(())
    }

    /// Render one page of `pdf` at `scale` times 72 dpi.
    pub fn render(&self, pdf: &[u8], page: u32, scale: f32) -> Result<RasterImage> {
        let dir = scratch_dir()?;
        let source = dir.path().join("source.pdf");
        fs::write(&source, pdf)?;

        let prefix = dir.path().join(format!("page-{}", page));
        let dpi = (BASE_DPI * scale).round().max(1.0) as u32;
        let output = Command::new(&self.binary)
            .arg("-png")
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg("-singlefile")
            .arg(&source)
            .arg(&prefix)
            .output()
            .map_err(|e| Error::Render(format!("Failed to run pdftoppm: {}", e)))?;

        // Only the image has to outlive this call.
        let _ = fs::remove_file(&source);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Render(format!(
                "pdftoppm failed on page {}: {}",
                page,
                stderr.trim()
            )));
        }

        let path = prefix.with_extension("png");
        if !path.exists() {
            return Err(Error::Render(format!(
                "pdftoppm produced no image for page {}",
                page
            )));
        }

        Ok(RasterImage {
            page,
            path,
            _dir: dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_image_released_on_drop() {
        let image = RasterImage::from_png(3, b"\x89PNG\r\n\x1a\n").unwrap();
        let path = image.path().to_path_buf();
        assert_eq!(image.page(), 3);
        assert!(path.exists());

        drop(image);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn test_probe_missing_binary() {
        let rasterizer = PopplerRasterizer::new().with_binary("/nonexistent/bin/pdftoppm");
        assert!(matches!(rasterizer.probe(), Err(Error::Render(_))));
    }

    #[test]
    fn test_render_with_missing_binary_fails() {
        let rasterizer = PopplerRasterizer::new().with_binary("/nonexistent/bin/pdftoppm");
        let result = rasterizer.render(b"%PDF-1.4", 1, 2.0);
        assert!(matches!(result, Err(Error::Render(_))));
    }
}
