//! Rendering module for parse results.

mod json;
mod report;

pub use json::{to_json, JsonFormat};
pub use report::{ResumeReport, PREVIEW_CHARS};
