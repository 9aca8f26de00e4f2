// src/core/browser.rs
//
// Browser session: navigate to a URL and hand back the rendered markup.
// The listing builds its table client-side, so a plain HTTP GET is not enough.

use std::fmt::Display;
use std::sync::Arc;

use headless_chrome::{Browser, LaunchOptions, Tab};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::options::BrowserOptions;
use crate::error::{Result, ScrapeError};

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("timed out loading {url}")]
    Timeout { url: String },

    #[error("failed loading {url}: {message}")]
    Failed { url: String, message: String },
}

impl NavigateError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, NavigateError::Timeout { .. })
    }
}

impl From<NavigateError> for ScrapeError {
    fn from(err: NavigateError) -> Self {
        match err {
            NavigateError::Timeout { url } => ScrapeError::Timeout { url },
            NavigateError::Failed { url, message } => {
                ScrapeError::Browser(format!("{url}: {message}"))
            }
        }
    }
}

/// One live browser context. Dropping it ends the session.
pub trait Session {
    /// Load `url` and return the fully rendered document.
    fn navigate(&mut self, url: &str) -> std::result::Result<String, NavigateError>;
}

/// Headless Chrome with a single reused tab.
/// Chrome is killed when the inner `Browser` drops.
pub struct ChromeSession {
    _browser: Browser,
    tab: Arc<Tab>,
    ready_selector: String,
}

impl ChromeSession {
    pub fn launch(opts: &BrowserOptions) -> Result<Self> {
        let launch = LaunchOptions::default_builder()
            .headless(opts.headless)
            .idle_browser_timeout(opts.idle_timeout)
            .build()
            .map_err(|e| ScrapeError::Browser(format!("launch options: {e}")))?;

        let browser = Browser::new(launch).map_err(|e| ScrapeError::Browser(format!("{e:#}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::Browser(format!("{e:#}")))?;
        tab.set_default_timeout(opts.nav_timeout);

        info!(headless = opts.headless, timeout = ?opts.nav_timeout, "browser session started");

        Ok(Self {
            _browser: browser,
            tab,
            ready_selector: opts.ready_selector.clone(),
        })
    }
}

impl Session for ChromeSession {
    fn navigate(&mut self, url: &str) -> std::result::Result<String, NavigateError> {
        debug!(url, "navigate");
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| classify(url, e))?;

        if !self.ready_selector.is_empty() {
            self.tab
                .wait_for_element(&self.ready_selector)
                .map(|_| ())
                .map_err(|e| classify(url, e))?;
        }

        self.tab.get_content().map_err(|e| classify(url, e))
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        info!("browser session closed");
    }
}

/// headless_chrome reports waits that never complete as plain errors;
/// tell them apart by message.
fn classify<E: Display>(url: &str, err: E) -> NavigateError {
    let message = format!("{err:#}");
    if looks_like_timeout(&message) {
        NavigateError::Timeout { url: s!(url) }
    } else {
        NavigateError::Failed { url: s!(url), message }
    }
}

fn looks_like_timeout(message: &str) -> bool {
    let lc = message.to_ascii_lowercase();
    lc.contains("timeout") || lc.contains("timed out") || lc.contains("never came")
}
