//! Chapters and how they are named

use std::path::PathBuf;
use url::Url;
use crate::error::{Error, Result};

/// Label given to a page whose URL has no path segments
pub const HOME_LABEL: &str = "home";

/// One captured web page, stored as a PDF file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Name shown in the table of contents
    pub name: String,
    /// Location of the chapter's PDF
    pub path: PathBuf,
}

impl Chapter {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Derive a chapter name from a page URL
///
/// Uses the last non-empty path segment, so both `/classification` and
/// `/classification/` give `classification`. The site root gives
/// [`HOME_LABEL`].
///
/// # Example
///
/// ```
/// use pdf_book::chapter::chapter_name;
///
/// assert_eq!(chapter_name("https://cs231n.github.io/").unwrap(), "home");
/// assert_eq!(chapter_name("https://cs231n.github.io/optimization-1/").unwrap(), "optimization-1");
/// ```
pub fn chapter_name(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let name = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or(HOME_LABEL);

    Ok(name.to_string())
}

/// File name for a captured chapter: `<prefix>_<index>_<name>.pdf`
pub fn chapter_file_name(prefix: &str, index: usize, name: &str) -> String {
    format!("{}_{}_{}.pdf", prefix, index, name)
}
