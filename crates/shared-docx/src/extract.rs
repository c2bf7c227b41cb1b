//! Raw text extraction from OOXML word documents
//!
//! Only the main document part (`word/document.xml`) is read. Text runs are
//! concatenated, tabs and breaks are kept, and every paragraph ends with a
//! blank line so headings land on lines of their own.
//!
//! # Example
//! ```no_run
//! use shared_docx::{DocxExtractor, ExtractionError};
//!
//! fn load(path: &str) -> Result<(), ExtractionError> {
//!     let document = DocxExtractor::extract_file(path, 450)?;
//!     println!("{} words, ~{} pages", document.word_count, document.pages);
//!     Ok(())
//! }
//! ```

use crate::error::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;
use shared_types::DocumentContent;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Words per page used when no template override is given
pub const DEFAULT_WORDS_PER_PAGE: u32 = 450;

/// Text and size estimate of an extracted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub word_count: usize,
    /// `ceil(word_count / words_per_page)`
    pub pages: u32,
}

impl From<ExtractedDocument> for DocumentContent {
    fn from(document: ExtractedDocument) -> Self {
        DocumentContent::new(document.text, document.pages)
    }
}

/// Page estimate from a word count, rounding up
pub fn estimate_pages(word_count: usize, words_per_page: u32) -> u32 {
    let per_page = words_per_page.max(1) as usize;
    word_count.div_ceil(per_page) as u32
}

pub struct DocxExtractor;

impl DocxExtractor {
    /// Read and extract a `.docx` file. Any other extension is rejected
    /// before the file is opened.
    pub fn extract_file<P: AsRef<Path>>(
        path: P,
        words_per_page: u32,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let path = path.as_ref();
        let is_docx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
        if !is_docx {
            return Err(ExtractionError::UnsupportedFormat(path.display().to_string()));
        }

        let bytes = fs::read(path)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Self::extract(&bytes, words_per_page)
    }

    /// Extract text from `.docx` bytes
    ///
    /// # Errors
    /// - `InvalidArchive` - the bytes are not a zip archive
    /// - `MissingDocumentPart` - the archive has no `word/document.xml`
    /// - `MalformedXml` - the document part cannot be parsed
    /// - `EmptyDocument` - nothing but whitespace was extracted
    pub fn extract(bytes: &[u8], words_per_page: u32) -> Result<ExtractedDocument, ExtractionError> {
        let xml = Self::document_xml(bytes)?;
        let text = Self::xml_to_text(&xml)?;

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let word_count = text.split_whitespace().count();
        let pages = estimate_pages(word_count, words_per_page);
        tracing::debug!(word_count, pages, "extracted document text");

        Ok(ExtractedDocument {
            text,
            word_count,
            pages,
        })
    }

    fn document_xml(bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractionError::InvalidArchive(e.to_string()))?;

        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => return Err(ExtractionError::MissingDocumentPart),
            Err(e) => return Err(ExtractionError::InvalidArchive(e.to_string())),
        };

        let mut raw = Vec::new();
        part.read_to_end(&mut raw)?;
        String::from_utf8(raw).map_err(|e| ExtractionError::MalformedXml(e.to_string()))
    }

    /// Plain text of a WordprocessingML document body
    pub fn xml_to_text(xml: &str) -> Result<String, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut text = String::new();
        let mut in_text_run = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    if e.name().as_ref() == b"w:t" {
                        in_text_run = true;
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => text.push_str("\n\n"),
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"w:tab" => text.push('\t'),
                    b"w:br" | b"w:cr" => text.push('\n'),
                    b"w:p" => text.push_str("\n\n"),
                    _ => {}
                },
                Ok(Event::Text(e)) if in_text_run => {
                    let unescaped = e
                        .unescape()
                        .map_err(|e| ExtractionError::MalformedXml(e.to_string()))?;
                    text.push_str(&unescaped);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractionError::MalformedXml(format!(
                        "at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
        }

        Ok(text)
    }
}
