//! PDF manipulation module

pub mod font;
pub mod merge;
pub mod metadata;
pub mod toc;

// Re-export commonly used items
pub use merge::{merge_pdfs, MergeOptions};
pub use metadata::count_pages;
pub use toc::{build_toc_entries, create_toc, toc_entries, TocEntry, TocOptions};
