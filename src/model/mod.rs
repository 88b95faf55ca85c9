//! Output model of the field extraction engine.

mod resume;

pub use resume::{Certification, Education, Experience, ProfileLinks, StructuredResume};
