//! Text acquisition from resume PDFs.
//!
//! Validation, the embedded text layer and the optical fallback are
//! orchestrated by [`TextAcquisition`].

mod options;
mod pipeline;
mod validator;

#[cfg(test)]
pub(crate) mod testing;

pub use options::{AcquireOptions, ErrorMode};
pub use pipeline::{AcquiredText, TextAcquisition, TextSource, PAGE_BREAK};
pub use validator::{validate, Validation};
