//! Word document text extraction
//!
//! Turns a `.docx` file into plain text plus a page estimate, the input the
//! compliance checks work from.

pub mod error;
pub mod extract;

pub use error::ExtractionError;
pub use extract::{estimate_pages, DocxExtractor, ExtractedDocument, DEFAULT_WORDS_PER_PAGE};
