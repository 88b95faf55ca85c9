//! Shared fixtures: PDFs built through lopdf's object API, and collaborators
//! that stand in for the rasterizer and OCR engine.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use unresume::error::{Error, Result};
use unresume::pdf::{LopdfBackend, LopdfLoader, PdfBackend, PdfLoader, RasterImage};
use unresume::TextRecognizer;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Build a PDF whose pages carry the given lines of Courier text.
/// A page with no lines has an empty content stream.
pub fn text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    build_pdf(pages, None)
}

/// A PDF of `count` pages without any text layer, as a scanner produces.
pub fn scanned_pdf(count: usize) -> Vec<u8> {
    let blank: &[&str] = &[];
    build_pdf(&vec![blank; count], None)
}

/// A structurally valid PDF without pages.
pub fn empty_pdf() -> Vec<u8> {
    build_pdf(&[], None)
}

/// A one-page text PDF with an information dictionary.
pub fn pdf_with_info(title: &str, author: &str, created: &str) -> Vec<u8> {
    build_pdf(
        &[&["Jane Doe, Backend Engineer"]],
        Some((title, author, created)),
    )
}

fn build_pdf(pages: &[&[&str]], info: Option<(&str, &str, &str)>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|lines| add_page(&mut doc, pages_id, lines).into())
        .collect();

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some((title, author, created)) = info {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal(author),
            "CreationDate" => Object::string_literal(created),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize fixture PDF");
    buf
}

fn add_page(doc: &mut Document, parent: ObjectId, lines: &[&str]) -> ObjectId {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        // One text object per line so each line ends with a newline.
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new(
            "Td",
            vec![50.into(), (800 - 16 * i as i64).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode fixture content"),
    ));

    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
    })
}

/// Loader decoding with lopdf but "rendering" pages to placeholder images,
/// so the optical path can run without poppler.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderLoader {
    inner: LopdfLoader,
}

pub struct PlaceholderRenderBackend {
    inner: LopdfBackend,
}

impl PdfBackend for PlaceholderRenderBackend {
    fn page_count(&self) -> u32 {
        self.inner.page_count()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.inner.page_text(page)
    }

    fn render_page(&self, page: u32, _scale: f32) -> Result<RasterImage> {
        RasterImage::from_png(page, PNG_MAGIC)
    }
}

impl PdfLoader for PlaceholderRenderLoader {
    type Backend = PlaceholderRenderBackend;

    fn load(&self, data: &[u8]) -> Result<PlaceholderRenderBackend> {
        Ok(PlaceholderRenderBackend {
            inner: self.inner.load(data)?,
        })
    }
}

/// Recognizer returning canned text per page.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRecognizer {
    pages: Vec<String>,
    installed: bool,
}

impl ScriptedRecognizer {
    /// Page `n` recognizes as `pages[n - 1]`.
    pub fn new(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
            installed: true,
        }
    }

    /// A recognizer whose engine is missing.
    pub fn missing() -> Self {
        Self::default()
    }
}

impl TextRecognizer for ScriptedRecognizer {
    fn probe(&self) -> Result<String> {
        if self.installed {
            Ok("scripted".to_string())
        } else {
            Err(Error::Ocr("tesseract not found".to_string()))
        }
    }

    fn recognize(&self, image: &RasterImage, _language: &str) -> Result<String> {
        assert!(image.path().exists(), "image released before recognition");
        self.pages
            .get(image.page() as usize - 1)
            .cloned()
            .ok_or_else(|| Error::Ocr(format!("no script for page {}", image.page())))
    }
}
