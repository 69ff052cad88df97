//! # pdfpages
//!
//! Print the text of a PDF document page by page.
//!
//! Every page, in physical order, is written as a `--- Page N ---` header
//! line, the page's extracted text and a blank line. Parsing and text
//! extraction are delegated to `lopdf`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpages::{print_pages, PrinterConfig};
//!
//! fn main() -> pdfpages::Result<()> {
//!     let config = PrinterConfig::new().with_input_path("report.pdf");
//!     let mut stdout = std::io::stdout().lock();
//!     print_pages(&config, &mut stdout)?;
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod parser;
pub mod printer;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use model::PageText;
pub use options::{ErrorMode, PrinterConfig, DEFAULT_INPUT_PATH};
pub use parser::{LopdfBackend, PdfBackend};
pub use printer::PageTextPrinter;
pub use render::OutputEncoding;

use std::io::Write;
use std::path::Path;

/// Print every page of the configured document to `out`.
///
/// Returns the number of pages printed.
///
/// # Example
///
/// ```no_run
/// use pdfpages::{print_pages, PrinterConfig};
///
/// let mut out = Vec::new();
/// let pages = print_pages(&PrinterConfig::default(), &mut out).unwrap();
/// println!("{} pages", pages);
/// ```
pub fn print_pages<W: Write>(config: &PrinterConfig, out: &mut W) -> Result<usize> {
    let printer = PageTextPrinter::open(config.clone())?;
    printer.print_to(out)
}

/// Print every page of the PDF at `path` with default settings.
pub fn print_file<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> Result<usize> {
    let config = PrinterConfig::new().with_input_path(path.as_ref());
    print_pages(&config, out)
}

/// Print every page of an in-memory PDF.
pub fn print_bytes<W: Write>(data: &[u8], config: &PrinterConfig, out: &mut W) -> Result<usize> {
    let backend = LopdfBackend::load_bytes(data)?;
    PageTextPrinter::with_backend(backend, config.clone()).print_to(out)
}

/// Extract the text of every page of the PDF at `path`.
///
/// # Example
///
/// ```no_run
/// use pdfpages::extract_pages;
///
/// for page in extract_pages("report.pdf").unwrap() {
///     println!("{}: {} chars", page.number, page.text.len());
/// }
/// ```
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<PageText>> {
    let config = PrinterConfig::new().with_input_path(path.as_ref());
    let printer = PageTextPrinter::open(config)?;
    printer.pages().collect()
}
