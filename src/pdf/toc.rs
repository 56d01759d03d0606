//! Table of contents generation
//!
//! The table of contents is a single page placed in front of every chapter.
//! Page numbers are projected from the page counts of the chapter files alone:
//! the table itself is page 1 and each chapter starts right after the last page
//! of the one before it.

use std::path::PathBuf;
use chrono::Utc;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use tracing::{debug, info};
use crate::chapter::Chapter;
use crate::error::Result;
use crate::layout::{content_width, Length, Margins, PageDimensions};
use crate::pdf::font::{encode_text, StandardFont};
use crate::pdf::metadata::count_pages;

/// A chapter name and the page it starts on in the merged book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub name: String,
    /// 1-indexed page in the merged document
    pub start_page: usize,
}

/// Options for rendering the table of contents page
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Heading centered at the top of the page
    pub title: String,
    /// Output PDF file path
    pub output_path: PathBuf,
    pub page: PageDimensions,
    pub margins: Margins,
    /// Height of the title row and of every entry row
    pub row_height: Length,
    /// Horizontal padding inside each row
    pub cell_padding: Length,
    /// Title font size in points
    pub title_font_size: f64,
    /// Entry font size in points
    pub entry_font_size: f64,
}

impl TocOptions {
    /// A4 page, 10mm margins, 16pt bold title and 12pt entries
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            title: "Table of Contents".to_string(),
            output_path: output_path.into(),
            page: PageDimensions::a4(),
            margins: Margins::default(),
            row_height: Length::from_mm(10.0),
            cell_padding: Length::from_mm(1.0),
            title_font_size: 16.0,
            entry_font_size: 12.0,
        }
    }
}

/// Project the starting page of each chapter from its page count
///
/// # Example
///
/// ```
/// use pdf_book::pdf::toc_entries;
///
/// let entries = toc_entries(&[("a", 3), ("b", 2), ("c", 5)]);
/// let starts: Vec<usize> = entries.iter().map(|e| e.start_page).collect();
/// assert_eq!(starts, vec![2, 5, 7]);
/// ```
pub fn toc_entries<S: AsRef<str>>(chapters: &[(S, usize)]) -> Vec<TocEntry> {
    // The table of contents occupies page 1
    let mut current_page = 1;

    chapters
        .iter()
        .map(|(name, page_count)| {
            let entry = TocEntry {
                name: name.as_ref().to_string(),
                start_page: current_page + 1,
            };
            current_page += page_count;
            entry
        })
        .collect()
}

/// Read each chapter's page count from disk and project its starting page
pub fn build_toc_entries(chapters: &[Chapter]) -> Result<Vec<TocEntry>> {
    let mut counted = Vec::with_capacity(chapters.len());
    for chapter in chapters {
        let page_count = count_pages(&chapter.path)?;
        debug!("{} has {} pages", chapter.path.display(), page_count);
        counted.push((chapter.name.as_str(), page_count));
    }

    Ok(toc_entries(&counted))
}

/// Write the table of contents PDF for `chapters`
///
/// Returns the entries that were rendered.
pub fn create_toc(chapters: &[Chapter], options: &TocOptions) -> Result<Vec<TocEntry>> {
    let entries = build_toc_entries(chapters)?;
    for entry in &entries {
        debug!("{} starts on page {}", entry.name, entry.start_page);
    }

    render_toc(&entries, options)?;
    info!(
        "Wrote table of contents with {} entries to {}",
        entries.len(),
        options.output_path.display()
    );

    Ok(entries)
}

/// Render already projected entries as a one-page PDF
pub fn render_toc(entries: &[TocEntry], options: &TocOptions) -> Result<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = StandardFont::Helvetica.add_to(&mut doc);
    let bold_id = StandardFont::HelveticaBold.add_to(&mut doc);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let content = toc_content(entries, options);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(options.page.width.pt() as f32),
            Object::Real(options.page.height.pt() as f32),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_text(&options.title)),
        "Producer" => Object::string_literal(concat!("pdf-book ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();
    doc.save(&options.output_path)?;

    Ok(())
}

/// Baseline of a row whose top edge is `row_top` (measured from the page top)
fn baseline(options: &TocOptions, row_top: f64, font_size: f64) -> f64 {
    let page_height = options.page.height.pt();
    // Vertically center the glyphs in the row; cap height is roughly 0.7 em
    page_height - row_top - options.row_height.pt() / 2.0 - 0.35 * font_size
}

/// Generate the content stream for the table of contents page
fn toc_content(entries: &[TocEntry], options: &TocOptions) -> String {
    let mut content = String::new();
    content.push_str("0 g\n");

    let left = options.margins.left.pt();
    let width = content_width(&options.page, &options.margins).pt();
    let padding = options.cell_padding.pt();
    let row_height = options.row_height.pt();
    let mut row_top = options.margins.top.pt();

    // Title, centered
    let title_width = StandardFont::HelveticaBold.text_width(&options.title, options.title_font_size);
    let title_x = left + (width - title_width) / 2.0;
    push_text(
        &mut content,
        "F2",
        options.title_font_size,
        title_x,
        baseline(options, row_top, options.title_font_size),
        &options.title,
    );
    row_top += row_height;

    // One row per chapter: name on the left, page number on the right
    for entry in entries {
        let y = baseline(options, row_top, options.entry_font_size);
        push_text(&mut content, "F1", options.entry_font_size, left + padding, y, &entry.name);

        let page_number = entry.start_page.to_string();
        let number_width = StandardFont::Helvetica.text_width(&page_number, options.entry_font_size);
        let number_x = left + width - padding - number_width;
        push_text(&mut content, "F1", options.entry_font_size, number_x, y, &page_number);

        row_top += row_height;
    }

    content
}

fn push_text(content: &mut String, font: &str, size: f64, x: f64, y: f64, text: &str) {
    content.push_str("BT\n");
    content.push_str(&format!("/{} {} Tf\n", font, size));
    content.push_str(&format!("1 0 0 1 {:.2} {:.2} Tm\n", x, y));
    content.push_str(&format!("({}) Tj\n", encode_text(text)));
    content.push_str("ET\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn starts(entries: &[TocEntry]) -> Vec<usize> {
        entries.iter().map(|e| e.start_page).collect()
    }

    #[test]
    fn test_start_pages_account_for_toc_page() {
        let entries = toc_entries(&[("a", 3), ("b", 2), ("c", 5)]);
        assert_eq!(starts(&entries), vec![2, 5, 7]);
        assert_eq!(entries[1].name, "b");
    }

    #[test]
    fn test_first_chapter_starts_on_page_two() {
        let entries = toc_entries(&[("home", 7)]);
        assert_eq!(starts(&entries), vec![2]);
    }

    #[test]
    fn test_zero_page_chapter_shares_start() {
        let entries = toc_entries(&[("a", 1), ("empty", 0), ("b", 4)]);
        assert_eq!(starts(&entries), vec![2, 3, 3]);
    }

    #[test]
    fn test_no_chapters() {
        let entries = toc_entries::<&str>(&[]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_projection_is_repeatable() {
        let chapters = [("a".to_string(), 4), ("b".to_string(), 1), ("c".to_string(), 9)];
        assert_eq!(toc_entries(&chapters), toc_entries(&chapters));
    }

    #[test]
    fn test_build_entries_missing_chapter_file() {
        let chapters = vec![Chapter::new("gone", "does/not/exist.pdf")];
        assert!(build_toc_entries(&chapters).is_err());
    }

    #[test]
    fn test_content_right_aligns_page_numbers() {
        let options = TocOptions::new("unused.pdf");
        let entries = toc_entries(&[("one", 1), ("two", 98)]);
        let content = toc_content(&entries, &options);

        assert!(content.contains("(Table of Contents) Tj"));
        assert!(content.contains("(one) Tj"));
        assert!(content.contains("(two) Tj"));
        assert!(content.contains("(2) Tj"));
        assert!(content.contains("(3) Tj"));

        // "2" and "3" are equally wide, so both numbers share an x position
        let right_edge = options.page.width.pt() - options.margins.right.pt() - options.cell_padding.pt();
        let x = right_edge - StandardFont::Helvetica.text_width("2", options.entry_font_size);
        let expected = format!("1 0 0 1 {:.2} ", x);
        assert_eq!(content.matches(&expected).count(), 2);
    }

    #[test]
    fn test_render_toc_single_page() {
        let dir = TempDir::new().unwrap();
        let options = TocOptions::new(dir.path().join("toc.pdf"));
        let entries = toc_entries(&[("intro", 2), ("methods", 3)]);

        render_toc(&entries, &options).unwrap();

        let mut doc = Document::load(&options.output_path).unwrap();
        doc.decompress();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = pages[&1];
        let content = String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).to_string();
        assert!(content.contains("(intro) Tj"));
        assert!(content.contains("(methods) Tj"));
        assert!(content.contains("(4) Tj"));
    }
}
