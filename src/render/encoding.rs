//! Output encodings.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Byte encoding applied to everything written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// UTF-8; every character is representable
    #[default]
    Utf8,
    /// ISO-8859-1; code points up to U+00FF
    Latin1,
    /// US-ASCII; code points up to U+007F
    Ascii,
}

impl OutputEncoding {
    /// Canonical label.
    pub fn name(self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "UTF-8",
            OutputEncoding::Latin1 => "ISO-8859-1",
            OutputEncoding::Ascii => "ASCII",
        }
    }

    fn max_code_point(self) -> u32 {
        match self {
            OutputEncoding::Utf8 => char::MAX as u32,
            OutputEncoding::Latin1 => 0xFF,
            OutputEncoding::Ascii => 0x7F,
        }
    }

    /// Encode text taken from `page`.
    ///
    /// Fails on the first character outside the encoding's range; nothing
    /// is substituted.
    pub fn encode(self, text: &str, page: u32) -> Result<Vec<u8>> {
        if self == OutputEncoding::Utf8 {
            return Ok(text.as_bytes().to_vec());
        }

        let max = self.max_code_point();
        text.chars()
            .map(|ch| {
                if (ch as u32) <= max {
                    Ok(ch as u32 as u8)
                } else {
                    Err(Error::Encoding {
                        page,
                        ch,
                        encoding: self.name(),
                    })
                }
            })
            .collect()
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(OutputEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" => Ok(OutputEncoding::Latin1),
            "ascii" | "us-ascii" => Ok(OutputEncoding::Ascii),
            _ => Err(Error::UnknownEncoding(s.to_string())),
        }
    }
}
