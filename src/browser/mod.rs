//! Shared browser session for catalog scraping and screenshot capture.
//!
//! The session wraps a headless Chrome instance with a single tab. It is
//! opened once at the start of a run, passed by reference to every step that
//! needs the page, and released when dropped. All methods are synchronous;
//! the pipeline is strictly sequential so nothing else contends for the tab.

use std::sync::Arc;

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::error::BrowserError;

/// Default viewport for the browser window.
const WINDOW_SIZE: (u32, u32) = (1920, 1080);

/// A headless Chrome session pointed at the development server.
pub struct BrowserSession {
    // Keeps the Chrome process alive for the lifetime of the session.
    _browser: Browser,
    tab: Arc<Tab>,
    url: String,
}

impl BrowserSession {
    /// Launch a browser and navigate to the session URL.
    ///
    /// A connection-level failure (unreachable host, refused connection)
    /// surfaces here as `BrowserError::ConnectionFailed` before any
    /// downstream pipeline step runs.
    pub fn open(url: &str, headless: bool) -> Result<Self, BrowserError> {
        let browser = Browser::new(LaunchOptions {
            headless,
            window_size: Some(WINDOW_SIZE),
            ..Default::default()
        })
        .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        tab.navigate_to(url)
            .and_then(|t| t.wait_until_navigated())
            .map_err(|e| BrowserError::ConnectionFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        tracing::info!(url, headless, "Browser session opened");

        Ok(Self {
            _browser: browser,
            tab,
            url: url.to_string(),
        })
    }

    /// Inner text of the page `<body>`.
    pub fn body_text(&self) -> Result<String, BrowserError> {
        let body = self
            .tab
            .wait_for_element("body")
            .map_err(|_| BrowserError::ElementNotFound("body".to_string()))?;

        body.get_inner_text()
            .map_err(|e| BrowserError::Protocol(e.to_string()))
    }

    /// Capture a PNG screenshot of the element matching `selector`.
    pub fn screenshot_element(&self, selector: &str) -> Result<Vec<u8>, BrowserError> {
        let element = self
            .tab
            .wait_for_element(selector)
            .map_err(|_| BrowserError::ElementNotFound(selector.to_string()))?;

        element
            .capture_screenshot(CaptureScreenshotFormatOption::Png)
            .map_err(|e| BrowserError::Protocol(e.to_string()))
    }
}

impl std::fmt::Debug for BrowserSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserSession")
            .field("url", &self.url)
            .finish()
    }
}
