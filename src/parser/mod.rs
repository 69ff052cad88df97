//! PDF loading and per-page text extraction.

mod backend;

pub use backend::{LopdfBackend, PdfBackend};
