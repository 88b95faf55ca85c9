//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the handful of PDF operations the
//! acquisition pipeline needs, isolating the concrete PDF library (lopdf)
//! and the page rasterizer (poppler) from the pipeline logic.

use std::collections::BTreeMap;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

use super::metadata::{self, DocumentInfo};
use super::raster::{PopplerRasterizer, RasterImage};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// Abstract interface for an opened PDF document.
///
/// Pages are numbered from 1. Dropping the value releases the decoded
/// document.
pub trait PdfBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Embedded (text layer) content of a page.
    fn page_text(&self, page: u32) -> Result<String>;

    /// Rasterize a page at the given linear magnification.
    fn render_page(&self, page: u32, scale: f32) -> Result<RasterImage>;
}

/// Opens [`PdfBackend`] handles from raw bytes.
pub trait PdfLoader {
    /// Backend produced by this loader.
    type Backend: PdfBackend + Sync;

    /// Decode a byte sequence as a PDF.
    fn load(&self, data: &[u8]) -> Result<Self::Backend>;

    /// Check whether the loader's backends can rasterize pages.
    fn probe_renderer(&self) -> Result<()> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
///
/// The original bytes are retained so pages can be handed to the
/// rasterizer, which works on whole files.
pub struct LopdfBackend {
    doc: LopdfDocument,
    pages: BTreeMap<u32, PageId>,
    data: Vec<u8>,
    rasterizer: PopplerRasterizer,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        Self::load_with_rasterizer(data, PopplerRasterizer::default())
    }

    /// Load from bytes, rendering pages with the given rasterizer.
    pub fn load_with_rasterizer(data: &[u8], rasterizer: PopplerRasterizer) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        let pages = doc.get_pages();
        Ok(Self {
            doc,
            pages,
            data: data.to_vec(),
            rasterizer,
        })
    }

    /// Document information dictionary and page count.
    pub fn info(&self) -> DocumentInfo {
        metadata::info_from_document(&self.doc, self.page_count())
    }
}

impl PdfBackend for LopdfBackend {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_text(&self, page: u32) -> Result<String> {
        if !self.pages.contains_key(&page) {
            return Err(Error::TextExtract(format!(
                "Page {} is out of range (document has {} pages)",
                page,
                self.pages.len()
            )));
        }
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page, e)))
    }

    fn render_page(&self, page: u32, scale: f32) -> Result<RasterImage> {
        self.rasterizer.render(&self.data, page, scale)
    }
}

/// Default [`PdfLoader`]: lopdf for decoding, poppler for rasterizing.
#[derive(Debug, Clone, Default)]
pub struct LopdfLoader {
    rasterizer: PopplerRasterizer,
}

impl LopdfLoader {
    /// Create a loader using `pdftoppm` from `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: PopplerRasterizer) -> Self {
        self.rasterizer = rasterizer;
        self
    }
}

impl PdfLoader for LopdfLoader {
    type Backend = LopdfBackend;

    fn load(&self, data: &[u8]) -> Result<LopdfBackend> {
        LopdfBackend::load_with_rasterizer(data, self.rasterizer.clone())
    }

    fn probe_renderer(&self) -> Result<()> {
        self.rasterizer.probe()
    }
}
