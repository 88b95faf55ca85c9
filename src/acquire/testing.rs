//! In-memory collaborators for pipeline unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ocr::TextRecognizer;
use crate::pdf::{PdfBackend, PdfLoader, RasterImage};

#[derive(Debug, Clone, Default)]
pub struct FakeLoader {
    pub pages: Vec<String>,
    pub broken_pages: Vec<u32>,
    pub undecodable: bool,
    pub renderable: bool,
    pub renders: Arc<AtomicUsize>,
}

impl FakeLoader {
    pub fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
            renderable: true,
            ..Default::default()
        }
    }
}

pub struct FakeBackend {
    pages: Vec<String>,
    broken_pages: Vec<u32>,
    renders: Arc<AtomicUsize>,
}

impl PdfBackend for FakeBackend {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        if self.broken_pages.contains(&page) {
            return Err(Error::TextExtract(format!("Page {}: bad content", page)));
        }
        Ok(self.pages[(page - 1) as usize].clone())
    }

    fn render_page(&self, page: u32, _scale: f32) -> Result<RasterImage> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        RasterImage::from_png(page, b"\x89PNG\r\n\x1a\n")
    }
}

impl PdfLoader for FakeLoader {
    type Backend = FakeBackend;

    fn load(&self, _data: &[u8]) -> Result<FakeBackend> {
        if self.undecodable {
            return Err(Error::Extraction("invalid file header".to_string()));
        }
        Ok(FakeBackend {
            pages: self.pages.clone(),
            broken_pages: self.broken_pages.clone(),
            renders: Arc::clone(&self.renders),
        })
    }

    fn probe_renderer(&self) -> Result<()> {
        if self.renderable {
            Ok(())
        } else {
            Err(Error::Render("no rasterizer".to_string()))
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeRecognizer {
    pub available: bool,
    pub failing_page: Option<u32>,
    pub calls: Arc<AtomicUsize>,
}

impl FakeRecognizer {
    pub fn available() -> Self {
        Self {
            available: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextRecognizer for FakeRecognizer {
    fn probe(&self) -> Result<String> {
        if self.available {
            Ok("fake 1.0".to_string())
        } else {
            Err(Error::Ocr("not installed".to_string()))
        }
    }

    fn recognize(&self, image: &RasterImage, _language: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_page == Some(image.page()) {
            return Err(Error::Ocr("engine crashed".to_string()));
        }
        Ok(format!("Scanned text of page {}", image.page()))
    }
}
