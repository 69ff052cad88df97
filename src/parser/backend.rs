//! PDF backend abstraction layer.
//!
//! The printer only needs an ordered page sequence and per-page text, so
//! that is all [`PdfBackend`] exposes. [`LopdfBackend`] is the concrete
//! implementation; everything about object graphs, fonts and content
//! streams stays inside `lopdf`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};

/// Abstract interface for page-level text access.
pub trait PdfBackend {
    /// Page numbers (1-indexed) in physical document order.
    fn page_numbers(&self) -> Vec<u32>;

    /// Extract the text of one page.
    ///
    /// `Ok` with an empty string means the page yielded no text; failures
    /// are reported as [`Error::TextExtract`].
    fn page_text(&self, page: u32) -> Result<String>;

    /// Number of pages in the document.
    fn page_count(&self) -> usize {
        self.page_numbers().len()
    }
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
    /// Page numbers, walked from the page tree once at load time.
    pages: Vec<u32>,
}

impl LopdfBackend {
    /// Load from a file path.
    ///
    /// The file is read into memory and its handle released before parsing
    /// starts, so no handle outlives this call on any path.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = read_file(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data)?;

        // lopdf reports a missing catalog or page tree as zero pages.
        doc.catalog()
            .and_then(|catalog| catalog.get(b"Pages"))
            .map_err(|e| Error::MalformedDocument(format!("no page tree: {}", e)))?;

        if doc.is_encrypted() {
            log::debug!("document declares encryption; relying on lopdf default decryption");
        }

        // BTreeMap keys come out sorted, which is physical page order.
        let pages = doc.get_pages().into_keys().collect::<Vec<_>>();
        let backend = Self { doc, pages };
        log::debug!(
            "loaded PDF {} with {} pages",
            backend.version(),
            backend.pages.len()
        );

        Ok(backend)
    }

    /// PDF version declared by the document.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

impl PdfBackend for LopdfBackend {
    fn page_numbers(&self) -> Vec<u32> {
        self.pages.clone()
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, page: u32) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract {
                page,
                reason: e.to_string(),
            })
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    let to_error = |source: std::io::Error| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(to_error)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(to_error)?;
    Ok(data)
}
