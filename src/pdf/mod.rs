//! PDF access: decoding, page rasterization and document metadata.

mod backend;
mod metadata;
mod raster;

pub use backend::{LopdfBackend, LopdfLoader, PageId, PdfBackend, PdfLoader};
pub use metadata::{read_info, DocumentInfo};
pub use raster::{PopplerRasterizer, RasterImage};
