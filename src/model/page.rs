//! Page-level types.

/// Text extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text; empty when the page yielded nothing
    pub text: String,
}

impl PageText {
    /// Create a page from raw extractor output.
    ///
    /// Trailing line breaks are stripped; the printer adds its own.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        let mut text = text.into();
        let keep = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(keep);
        Self { number, text }
    }

    /// Create a page with no text.
    pub fn empty(number: u32) -> Self {
        Self {
            number,
            text: String::new(),
        }
    }

    /// Check if the page has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
