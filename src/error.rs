//! Error types for pdfpages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfpages operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while printing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing or cannot be read.
    #[error("Cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header carries a version we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF structure could not be parsed.
    #[error("Malformed PDF document: {0}")]
    MalformedDocument(String),

    /// The PDF document is encrypted and no credentials were supplied.
    #[error("Document is encrypted")]
    Encrypted,

    /// Text extraction failed for a single page.
    #[error("Text extraction failed on page {page}: {reason}")]
    TextExtract { page: u32, reason: String },

    /// Page text contains a character the output encoding cannot represent.
    #[error("Page {page}: character {ch:?} cannot be encoded as {encoding}")]
    Encoding {
        page: u32,
        ch: char,
        encoding: &'static str,
    },

    /// An output encoding label was not recognized.
    #[error("Unknown output encoding: {0}")]
    UnknownEncoding(String),
}

impl Error {
    /// True for failures that happen before any page is printed.
    pub fn is_document_level(&self) -> bool {
        matches!(
            self,
            Error::FileAccess { .. }
                | Error::UnknownFormat
                | Error::UnsupportedVersion(_)
                | Error::MalformedDocument(_)
                | Error::Encrypted
        )
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::MalformedDocument(err.to_string()),
        }
    }
}
