//! Printer options and configuration.

use std::path::PathBuf;

use crate::render::OutputEncoding;

/// Input file used when no path is supplied.
pub const DEFAULT_INPUT_PATH: &str = "TPOFIN~1.PDF";

/// Options for a page printing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// PDF file to read
    pub input_path: PathBuf,

    /// Encoding used for bytes written to the output
    pub output_encoding: OutputEncoding,

    /// What to do when a single page fails to extract
    pub error_mode: ErrorMode,
}

impl PrinterConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input path.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Set the output encoding.
    pub fn with_output_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.output_encoding = encoding;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Continue past pages whose extraction fails.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_encoding: OutputEncoding::Utf8,
            error_mode: ErrorMode::Strict,
        }
    }
}

/// Per-page error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first page that fails
    #[default]
    Strict,
    /// Log the failure, print the page with empty text, keep going
    Lenient,
}
