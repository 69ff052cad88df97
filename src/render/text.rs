//! Plain text rendering of page blocks.

use crate::model::PageText;

/// Header line printed before each page's text (without line break).
pub fn page_header(number: u32) -> String {
    format!("--- Page {} ---", number)
}

/// Render one page as `header`, text, blank line.
pub fn render_page(page: &PageText) -> String {
    let mut out = String::with_capacity(page.text.len() + 24);
    out.push_str(&page_header(page.number));
    out.push('\n');
    out.push_str(&page.text);
    out.push('\n');
    out.push('\n');
    out
}
