//! Rendering of page text into output bytes.

mod encoding;
mod text;

pub use encoding::OutputEncoding;
pub use text::{page_header, render_page};
