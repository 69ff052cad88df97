//! Document model types.

mod page;

pub use page::PageText;
