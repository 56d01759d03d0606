//! Building the book: capture, table of contents, merge

use std::fs;
use std::path::PathBuf;
use tracing::info;
use crate::capture::PageCapture;
use crate::chapter::{chapter_file_name, Chapter};
use crate::error::Result;
use crate::pdf::{create_toc, merge_pdfs, MergeOptions, TocEntry, TocOptions};

/// The cs231n course notes, in reading order
pub const CS231N_URLS: [&str; 12] = [
    "https://cs231n.github.io/",
    "https://cs231n.github.io/classification/",
    "https://cs231n.github.io/linear-classify/",
    "https://cs231n.github.io/optimization-1/",
    "https://cs231n.github.io/optimization-2/",
    "https://cs231n.github.io/neural-networks-1/",
    "https://cs231n.github.io/neural-networks-2/",
    "https://cs231n.github.io/neural-networks-3/",
    "https://cs231n.github.io/neural-networks-case-study/",
    "https://cs231n.github.io/convolutional-networks/",
    "https://cs231n.github.io/understanding-cnn/",
    "https://cs231n.github.io/transfer-learning/",
];

/// Directory receiving the chapter files, the table of contents and the book
pub const OUTPUT_DIR: &str = "data";

/// What to capture and where the files go
#[derive(Debug, Clone)]
pub struct BookConfig {
    /// Pages to capture, in chapter order
    pub urls: Vec<String>,
    /// Directory receiving every output file
    pub output_dir: PathBuf,
    /// Prefix of chapter file names
    pub prefix: String,
    /// File name of the table of contents PDF
    pub toc_file: String,
    /// File name of the merged book
    pub book_file: String,
}

impl BookConfig {
    /// The cs231n notes, written to [`OUTPUT_DIR`]
    pub fn cs231n() -> Self {
        Self {
            urls: CS231N_URLS.iter().map(|url| url.to_string()).collect(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            prefix: "cs231n".to_string(),
            toc_file: "cs231n-toc.pdf".to_string(),
            book_file: "cs231n-book.pdf".to_string(),
        }
    }

    pub fn toc_path(&self) -> PathBuf {
        self.output_dir.join(&self.toc_file)
    }

    pub fn book_path(&self) -> PathBuf {
        self.output_dir.join(&self.book_file)
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct Book {
    pub chapters: Vec<Chapter>,
    pub toc: Vec<TocEntry>,
    pub toc_path: PathBuf,
    pub book_path: PathBuf,
    /// Pages in the merged book, table of contents included
    pub page_count: usize,
}

/// Capture every page of `config` and write the chapter files
pub fn capture_chapters(capture: &mut dyn PageCapture, config: &BookConfig) -> Result<Vec<Chapter>> {
    fs::create_dir_all(&config.output_dir)?;

    let mut chapters = Vec::with_capacity(config.urls.len());
    for (index, url) in config.urls.iter().enumerate() {
        info!("Loading {}", url);
        let page = capture.capture(url)?;

        let path = config
            .output_dir
            .join(chapter_file_name(&config.prefix, index, &page.name));
        info!("Writing {}", path.display());
        fs::write(&path, &page.pdf)?;

        chapters.push(Chapter::new(page.name, path));
    }

    Ok(chapters)
}

/// Run the whole pipeline
///
/// Any failure stops the run where it happened; files already written stay in
/// the output directory.
pub fn build_book(capture: &mut dyn PageCapture, config: &BookConfig) -> Result<Book> {
    let chapters = capture_chapters(capture, config)?;

    info!("Creating table of contents");
    let toc_path = config.toc_path();
    let toc = create_toc(&chapters, &TocOptions::new(&toc_path))?;

    info!("Merging PDFs");
    let mut input_paths = Vec::with_capacity(chapters.len() + 1);
    input_paths.push(toc_path.clone());
    input_paths.extend(chapters.iter().map(|chapter| chapter.path.clone()));

    let book_path = config.book_path();
    let page_count = merge_pdfs(&MergeOptions {
        input_paths,
        output_path: book_path.clone(),
    })?;

    Ok(Book {
        chapters,
        toc,
        toc_path,
        book_path,
        page_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::chapter_name;

    #[test]
    fn test_cs231n_config() {
        let config = BookConfig::cs231n();

        assert_eq!(config.urls.len(), 12);
        assert_eq!(config.toc_path(), PathBuf::from("data/cs231n-toc.pdf"));
        assert_eq!(config.book_path(), PathBuf::from("data/cs231n-book.pdf"));
    }

    #[test]
    fn test_cs231n_chapter_names() {
        let names: Vec<String> = CS231N_URLS
            .iter()
            .map(|url| chapter_name(url).unwrap())
            .collect();

        assert_eq!(names[0], "home");
        assert_eq!(names[1], "classification");
        assert_eq!(names[11], "transfer-learning");
    }
}
