// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub browser: BrowserOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Rank + institution statistics (student counts, ratios).
    Ranking,
    /// Rank + pillar scores.
    Scores,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::Ranking, PageKind::Scores];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    /// Case-sensitive substring matched against the row's location text.
    pub country: String,
    pub page_count: u32,
    /// Sleep between page requests.
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            country: s!(DEFAULT_COUNTRY),
            page_count: DEFAULT_PAGE_COUNT,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    /// Applies to navigation and to waiting for `ready_selector`.
    pub nav_timeout: Duration,
    pub idle_timeout: Duration,
    /// Element that must exist before the page counts as rendered.
    pub ready_selector: String,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            nav_timeout: Duration::from_secs(NAV_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(IDLE_BROWSER_TIMEOUT_SECS),
            ready_selector: s!(READY_SELECTOR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the delimited formats; `None` for spreadsheets.
    pub fn delimiter(&self) -> Option<char> {
        match self {
            ExportFormat::Xlsx => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// User override. A directory (existing, or hinted by a trailing
    /// separator) receives the default file name.
    pub out: Option<PathBuf>,
}

impl ExportOptions {
    /// Final output path for a pipeline whose default stem is `stem`.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        let default_name = PathBuf::from(join!(stem, ".", self.format.ext()));
        match &self.out {
            None => default_name,
            Some(p) if p.as_os_str().is_empty() => default_name,
            Some(p) if looks_like_dir_hint(p) || p.is_dir() => p.join(default_name),
            Some(p) => p.clone(),
        }
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
