//! pdf-book CLI tool
//!
//! Captures the cs231n course notes into `data/` and binds them into a single
//! PDF. Takes no options beyond `--help` and `--version`.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pdf_book::book::{build_book, BookConfig};
use pdf_book::capture::ChromeCapture;

/// pdf-book - Bind the cs231n notes into one PDF with a table of contents
#[derive(Parser)]
#[command(name = "pdf-book")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _ = Cli::parse();
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let config = BookConfig::cs231n();
    let mut capture = ChromeCapture::new().context("Failed to start browser runtime")?;

    let book = build_book(&mut capture, &config)
        .with_context(|| format!("Failed to build book in {}", config.output_dir.display()))?;

    info!(
        "Book written to {} ({} chapters, {} pages)",
        book.book_path.display(),
        book.chapters.len(),
        book.page_count
    );

    Ok(())
}
