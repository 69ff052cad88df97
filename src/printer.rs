//! Page-by-page text printer.

use std::io::Write;

use crate::error::Result;
use crate::model::PageText;
use crate::options::{ErrorMode, PrinterConfig};
use crate::parser::{LopdfBackend, PdfBackend};
use crate::render::render_page;

/// Prints the text of every page of a document, in physical order.
///
/// Each page is written as a `--- Page N ---` header, the page text and a
/// blank line. Pages are written as soon as they are extracted, so a
/// failing page leaves the pages before it in the output.
pub struct PageTextPrinter<B: PdfBackend = LopdfBackend> {
    backend: B,
    config: PrinterConfig,
}

impl PageTextPrinter<LopdfBackend> {
    /// Open the document named by `config.input_path`.
    ///
    /// Every document-level failure (missing file, non-PDF, broken
    /// structure) surfaces here, before anything is printed.
    pub fn open(config: PrinterConfig) -> Result<Self> {
        let backend = LopdfBackend::load_file(&config.input_path)?;
        Ok(Self::with_backend(backend, config))
    }
}

impl<B: PdfBackend> PageTextPrinter<B> {
    /// Build a printer over an already loaded backend.
    pub fn with_backend(backend: B, config: PrinterConfig) -> Self {
        Self { backend, config }
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.backend.page_count()
    }

    /// Extract one page, applying the configured error mode.
    pub fn extract_page(&self, number: u32) -> Result<PageText> {
        match self.backend.page_text(number) {
            Ok(text) => Ok(PageText::new(number, text)),
            Err(e) if self.config.error_mode == ErrorMode::Lenient => {
                log::warn!("{}; printing page {} without text", e, number);
                Ok(PageText::empty(number))
            }
            Err(e) => Err(e),
        }
    }

    /// Lazily extract pages in document order.
    pub fn pages(&self) -> impl Iterator<Item = Result<PageText>> + '_ {
        self.backend
            .page_numbers()
            .into_iter()
            .map(move |number| self.extract_page(number))
    }

    /// Write every page to `out` and return how many pages were written.
    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut printed = 0;

        for page in self.pages() {
            let page = page?;
            let bytes = self
                .config
                .output_encoding
                .encode(&render_page(&page), page.number)?;
            out.write_all(&bytes)?;
            out.flush()?;
            printed += 1;
        }

        log::debug!("printed {} pages", printed);
        Ok(printed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::render::OutputEncoding;

    /// Backend serving canned page results.
    struct MockBackend {
        pages: Vec<std::result::Result<&'static str, &'static str>>,
    }

    impl PdfBackend for MockBackend {
        fn page_numbers(&self) -> Vec<u32> {
            (1..=self.pages.len() as u32).collect()
        }

        fn page_text(&self, page: u32) -> Result<String> {
            match self.pages[(page - 1) as usize] {
                Ok(text) => Ok(text.to_string()),
                Err(reason) => Err(Error::TextExtract {
                    page,
                    reason: reason.to_string(),
                }),
            }
        }
    }

    fn printer(
        pages: Vec<std::result::Result<&'static str, &'static str>>,
        config: PrinterConfig,
    ) -> PageTextPrinter<MockBackend> {
        PageTextPrinter::with_backend(MockBackend { pages }, config)
    }

    fn print(printer: &PageTextPrinter<MockBackend>) -> (Result<usize>, String) {
        let mut out = Vec::new();
        let result = printer.print_to(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_three_page_scenario() {
        let p = printer(
            vec![Ok("Hello\n"), Ok(""), Ok("World\n")],
            PrinterConfig::default(),
        );
        let (result, output) = print(&p);

        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            output,
            "--- Page 1 ---\nHello\n\n--- Page 2 ---\n\n\n--- Page 3 ---\nWorld\n\n"
        );
    }

    #[test]
    fn test_empty_document_prints_nothing() {
        let p = printer(vec![], PrinterConfig::default());
        let (result, output) = print(&p);
        assert_eq!(result.unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_strict_stops_at_failing_page() {
        let p = printer(
            vec![Ok("first"), Err("broken font"), Ok("never")],
            PrinterConfig::default(),
        );
        let (result, output) = print(&p);

        assert!(matches!(result, Err(Error::TextExtract { page: 2, .. })));
        assert_eq!(output, "--- Page 1 ---\nfirst\n\n");
    }

    #[test]
    fn test_lenient_continues_past_failing_page() {
        let p = printer(
            vec![Ok("first"), Err("broken font"), Ok("third")],
            PrinterConfig::default().lenient(),
        );
        let (result, output) = print(&p);

        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            output,
            "--- Page 1 ---\nfirst\n\n--- Page 2 ---\n\n\n--- Page 3 ---\nthird\n\n"
        );
    }

    #[test]
    fn test_encoding_failure_is_fatal_in_both_modes() {
        for config in [PrinterConfig::default(), PrinterConfig::default().lenient()] {
            let p = printer(
                vec![Ok("plain"), Ok("naïve"), Ok("after")],
                config.with_output_encoding(OutputEncoding::Ascii),
            );
            let (result, output) = print(&p);

            assert!(matches!(
                result,
                Err(Error::Encoding { page: 2, ch: 'ï', .. })
            ));
            assert_eq!(output, "--- Page 1 ---\nplain\n\n");
        }
    }

    #[test]
    fn test_latin1_output_bytes() {
        let p = printer(
            vec![Ok("café")],
            PrinterConfig::default().with_output_encoding(OutputEncoding::Latin1),
        );
        let mut out = Vec::new();
        p.print_to(&mut out).unwrap();

        let mut expected = b"--- Page 1 ---\ncaf".to_vec();
        expected.extend_from_slice(&[0xE9, b'\n', b'\n']);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_pages_iterator_order() {
        let p = printer(vec![Ok("a"), Ok("b"), Ok("c")], PrinterConfig::default());
        let numbers: Vec<u32> = p.pages().map(|page| page.unwrap().number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(p.page_count(), 3);
    }
}
