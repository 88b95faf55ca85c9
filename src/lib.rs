//! # unresume
//!
//! Resume PDF parsing library for Rust.
//!
//! This library turns a resume submitted as a PDF into a structured record
//! of contact details, skills, education, work history and certifications.
//! Text comes from the embedded text layer when there is one, and from
//! optical recognition when the document is a scan.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, JsonFormat};
//!
//! fn main() -> unresume::Result<()> {
//!     let report = parse_file("resume.pdf")?;
//!     println!("{:?} knows {} skills", report.resume.name, report.total_skills);
//!     println!("{}", report.to_json(JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Validation**: rejects empty, undecodable and page-less documents
//! - **OCR fallback**: scanned resumes go through `pdftoppm` and `tesseract`
//! - **Parallel processing**: uses Rayon to recognize pages concurrently
//! - **Heuristic extraction**: name, email, phone, location, profile links,
//!   skills, education, experience, certifications, years of experience
//! - **Pluggable taxonomy**: built-in skill catalog or your own list

pub mod acquire;
pub mod error;
pub mod extract;
pub mod model;
pub mod ocr;
pub mod pdf;
pub mod render;
pub mod taxonomy;

// Re-export commonly used types
pub use acquire::{
    AcquireOptions, AcquiredText, ErrorMode, TextAcquisition, TextSource, Validation, PAGE_BREAK,
};
pub use error::{Error, Result};
pub use extract::{ResumeExtractor, SkillMatcher};
pub use model::{Certification, Education, Experience, ProfileLinks, StructuredResume};
pub use ocr::{TesseractRecognizer, TextRecognizer};
pub use pdf::{read_info, DocumentInfo, LopdfLoader, PdfBackend, PdfLoader, PopplerRasterizer};
pub use render::{JsonFormat, ResumeReport};
pub use taxonomy::{SkillCategory, SkillTaxonomy};

use std::path::{Path, PathBuf};

/// Check whether a byte blob is a PDF the parser can handle.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("resume.pdf").unwrap();
/// let verdict = unresume::validate_bytes(&data);
/// println!("{}: {}", verdict.valid, verdict.reason);
/// ```
pub fn validate_bytes(data: &[u8]) -> Validation {
    TextAcquisition::new().validate(data)
}

/// Extract the text of a PDF held in memory, using OCR when needed.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("resume.pdf").unwrap();
/// let text = unresume::extract_text(&data).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text(data: &[u8]) -> Result<String> {
    TextAcquisition::new().extract_text(data)
}

/// Extract every field from already acquired text with the built-in
/// skill catalog.
///
/// # Example
///
/// ```
/// let resume = unresume::extract_all("Jane Doe\njane@example.com");
/// assert_eq!(resume.email.as_deref(), Some("jane@example.com"));
/// ```
pub fn extract_all(text: &str) -> StructuredResume {
    ResumeExtractor::default().extract_all(text)
}

/// Skills from the built-in catalog found in `text`.
///
/// # Example
///
/// ```
/// assert_eq!(unresume::extract_skills("Rust, Kafka"), vec!["kafka", "rust"]);
/// ```
pub fn extract_skills(text: &str) -> Vec<String> {
    SkillMatcher::builtin().find(text)
}

/// Validate, acquire and extract a resume held in memory.
pub fn parse_bytes(data: &[u8]) -> Result<ResumeReport> {
    Unresume::new().parse_bytes(data)
}

/// Validate, acquire and extract a resume file.
///
/// Only paths with a `.pdf` extension are accepted.
///
/// # Example
///
/// ```no_run
/// let report = unresume::parse_file("resume.pdf").unwrap();
/// println!("{:?}", report.resume.education);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ResumeReport> {
    Unresume::new().parse(path)
}

/// Builder for configuring and running the resume parser.
///
/// # Example
///
/// ```no_run
/// use unresume::{SkillTaxonomy, Unresume};
///
/// let report = Unresume::new()
///     .sequential()
///     .with_ocr_language("eng+hin")
///     .with_taxonomy(SkillTaxonomy::from_path("skills.txt")?)
///     .parse("resume.pdf")?;
/// # Ok::<(), unresume::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Unresume {
    options: AcquireOptions,
    taxonomy: Option<SkillTaxonomy>,
    tesseract: Option<PathBuf>,
    pdftoppm: Option<PathBuf>,
}

impl Unresume {
    /// Create a new Unresume builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all acquisition options.
    pub fn with_options(mut self, options: AcquireOptions) -> Self {
        self.options = options;
        self
    }

    /// Surface page text errors instead of skipping the page.
    pub fn strict(mut self) -> Self {
        self.options = self.options.strict();
        self
    }

    /// Skip pages whose text layer cannot be read.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Disable parallel OCR.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Never fall back to OCR.
    pub fn without_ocr(mut self) -> Self {
        self.options = self.options.without_ocr();
        self
    }

    /// Set the OCR language (tesseract language code).
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.options = self.options.with_ocr_language(language);
        self
    }

    /// Match skills from a custom taxonomy.
    pub fn with_taxonomy(mut self, taxonomy: SkillTaxonomy) -> Self {
        self.taxonomy = Some(taxonomy);
        self
    }

    /// Use a specific `tesseract` binary.
    pub fn with_tesseract(mut self, binary: impl Into<PathBuf>) -> Self {
        self.tesseract = Some(binary.into());
        self
    }

    /// Use a specific `pdftoppm` binary.
    pub fn with_pdftoppm(mut self, binary: impl Into<PathBuf>) -> Self {
        self.pdftoppm = Some(binary.into());
        self
    }

    /// Probe the external tools and compile the skill matcher.
    pub fn build(self) -> Result<ResumeParser> {
        let mut rasterizer = PopplerRasterizer::new();
        if let Some(binary) = self.pdftoppm {
            rasterizer = rasterizer.with_binary(binary);
        }
        let mut recognizer = TesseractRecognizer::new();
        if let Some(binary) = self.tesseract {
            recognizer = recognizer.with_binary(binary);
        }

        let acquisition = TextAcquisition::with_components(
            LopdfLoader::new().with_rasterizer(rasterizer),
            recognizer,
            self.options,
        );
        let extractor = match &self.taxonomy {
            Some(taxonomy) => ResumeExtractor::new(taxonomy)?,
            None => ResumeExtractor::default(),
        };
        Ok(ResumeParser::from_parts(acquisition, extractor))
    }

    /// Parse a resume file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ResumeReport> {
        self.build()?.parse_file(path)
    }

    /// Parse a resume held in memory.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ResumeReport> {
        self.build()?.parse_bytes(data)
    }
}

/// A configured parser: acquisition pipeline plus extraction engine.
///
/// Build one with [`Unresume::build`] and reuse it across documents; it
/// holds no per-document state.
pub struct ResumeParser<L = LopdfLoader, R = TesseractRecognizer> {
    acquisition: TextAcquisition<L, R>,
    extractor: ResumeExtractor,
}

impl<L, R> ResumeParser<L, R>
where
    L: PdfLoader + Sync,
    R: TextRecognizer + Sync,
{
    /// Assemble a parser from its two stages.
    pub fn from_parts(acquisition: TextAcquisition<L, R>, extractor: ResumeExtractor) -> Self {
        Self {
            acquisition,
            extractor,
        }
    }

    /// The acquisition stage.
    pub fn acquisition(&self) -> &TextAcquisition<L, R> {
        &self.acquisition
    }

    /// The extraction stage.
    pub fn extractor(&self) -> &ResumeExtractor {
        &self.extractor
    }

    /// Validate `data` without extracting anything.
    pub fn validate(&self, data: &[u8]) -> Validation {
        self.acquisition.validate(data)
    }

    /// Validate, acquire and extract a resume held in memory.
    ///
    /// A negative validation verdict is reported as
    /// [`Error::InvalidDocument`].
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ResumeReport> {
        let verdict = self.acquisition.validate(data);
        if !verdict.valid {
            return Err(Error::InvalidDocument(verdict.reason));
        }

        let acquired = self.acquisition.acquire(data)?;
        log::debug!(
            "Acquired {} characters from {} page(s) via {:?}",
            acquired.text.chars().count(),
            acquired.page_count,
            acquired.source
        );
        let resume = self.extractor.extract_all(&acquired.text);
        Ok(ResumeReport::new(acquired, resume))
    }

    /// Validate, acquire and extract a resume file.
    ///
    /// Paths without a `.pdf` extension are rejected before the file is read.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeReport> {
        let path = path.as_ref();
        ensure_pdf_path(path)?;
        let data = std::fs::read(path)?;
        self.parse_bytes(&data)
    }
}

fn ensure_pdf_path(path: &Path) -> Result<()> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(())
    } else {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Err(Error::UnsupportedFile(name))
    }
}
