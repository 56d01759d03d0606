//! PDF Book Library
//!
//! Binds a list of web pages into a single PDF book.
//! This library provides functionality to:
//! - Capture web pages as PDFs through a headless browser
//! - Count the pages of PDF files
//! - Render a one-page table of contents with projected page numbers
//! - Merge the table of contents and every chapter into one document
//!
//! # Example
//!
//! ```no_run
//! use pdf_book::book::{build_book, BookConfig};
//! use pdf_book::capture::ChromeCapture;
//!
//! let mut capture = ChromeCapture::new().expect("Failed to start runtime");
//! let config = BookConfig::cs231n();
//! let book = build_book(&mut capture, &config).expect("Failed to build book");
//! println!("{} pages", book.page_count);
//! ```

pub mod book;
pub mod capture;
pub mod chapter;
pub mod error;
pub mod layout;
pub mod pdf;

// Re-export commonly used items
pub use chapter::Chapter;
pub use error::{Error, Result};
