//! Error types for the pdf-book library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdf-book library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// URL could not be parsed
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Browser launch, navigation or printing failed
    #[error("Capture failed for {url}: {reason}")]
    Capture { url: String, reason: String },

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    pub(crate) fn capture(url: &str, reason: impl ToString) -> Self {
        Error::Capture {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
