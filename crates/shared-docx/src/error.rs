use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0} (expected .docx)")]
    UnsupportedFormat(String),

    #[error("Not a valid .docx archive: {0}")]
    InvalidArchive(String),

    #[error("Archive has no word/document.xml part")]
    MissingDocumentPart,

    #[error("Malformed document XML: {0}")]
    MalformedXml(String),

    #[error("Document contains no text")]
    EmptyDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
