//! Web page capture through a headless browser

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::error::CdpError;
use futures::StreamExt;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};
use crate::chapter::chapter_name;
use crate::error::{Error, Result};

/// A page rendered to PDF, with the chapter name derived from its URL
#[derive(Debug, Clone)]
pub struct CapturedPage {
    pub name: String,
    pub pdf: Vec<u8>,
}

/// Anything that can turn a URL into PDF bytes
pub trait PageCapture {
    fn capture(&mut self, url: &str) -> Result<CapturedPage>;
}

/// Captures pages with a headless Chromium driven over the DevTools protocol
///
/// A fresh browser is launched for every page and closed once the PDF has
/// been printed. The browser is driven from a single-threaded runtime, so each
/// call blocks until its page is done.
pub struct ChromeCapture {
    runtime: Runtime,
    print: PrintToPdfParams,
}

impl ChromeCapture {
    /// Capture with Chromium's default print settings
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime,
            print: PrintToPdfParams::default(),
        })
    }

    /// Use custom print settings (paper size, margins, backgrounds)
    pub fn with_print_params(mut self, print: PrintToPdfParams) -> Self {
        self.print = print;
        self
    }

    async fn render(url: &str, print: PrintToPdfParams) -> Result<CapturedPage> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(|e| Error::capture(url, e))?;
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::capture(url, e))?;

        // The handler has to be polled for the browser to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let printed = async {
            let page = browser.new_page(url).await?;
            page.wait_for_navigation().await?;
            let final_url = page.url().await?.unwrap_or_else(|| url.to_string());
            info!("Capturing {}", final_url);
            let pdf = page.pdf(print).await?;
            Ok::<_, CdpError>((final_url, pdf))
        }
        .await;

        let closed = browser.close().await;
        let _ = browser.wait().await;
        let _ = handler_task.await;

        let (final_url, pdf) = printed.map_err(|e| Error::capture(url, e))?;
        closed.map_err(|e| Error::capture(url, e))?;
        debug!("Printed {} bytes from {}", pdf.len(), final_url);

        Ok(CapturedPage {
            name: chapter_name(&final_url)?,
            pdf,
        })
    }
}

impl PageCapture for ChromeCapture {
    fn capture(&mut self, url: &str) -> Result<CapturedPage> {
        self.runtime.block_on(Self::render(url, self.print.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "requires a local Chrome or Chromium"]
    fn test_capture_renders_pdf() {
        let mut capture = ChromeCapture::new().unwrap();
        let page = capture.capture("https://example.com/").unwrap();

        assert_eq!(page.name, "home");
        assert!(page.pdf.starts_with(b"%PDF"));
    }
}
