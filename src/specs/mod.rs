// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for the rankings listing. Both pipelines read the
//! same `<tr>` rows; they differ only in which columns sit between *Location*
//! and *Website*, which URL fragment selects the view, and the output file
//! name. Each variant is a [`PageSpec`] value; [`extract`] is shared.
//!
//! ## What lives here
//! - **Pure document parsing**: rendered markup in, [`Record`]s out. No
//!   navigation, no persistence, no logging.
//! - **Field lookups** by tag/class, each one independent. A missing element
//!   leaves that value `None`; it never drops the row.
//! - **The country filter**: a case-sensitive substring test on the location
//!   text. A row whose location is missing never matches.
//!
//! ## What does **not** live here
//! - The page loop, session lifetime and timeout policy (`scrape`).
//! - Export formatting and the "N/A" sentinel (`store`, `file`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run_with_chrome → Session::navigate → specs::extract
//!                              ↘ RecordSet → file::persist
//! ```
//!
//! ## Conventions & invariants
//! - Every record from one spec has `spec.headers().len()` values, in header
//!   order. `extract` pads/truncates the metric block to enforce it.
//! - Source row order is preserved; nothing is sorted or deduplicated.
//! - Same document in, same records out.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::SITE_ORIGIN;
use crate::config::options::PageKind;
use crate::core::html::{self, css};
use crate::core::sanitize::{absolute_url, join_lines};
use crate::store::Record;

pub mod ranking;
pub mod scores;

/// Page-specific metric columns for one row, in `metric_headers` order.
pub type MetricsFn = fn(ElementRef<'_>) -> Vec<Option<String>>;

pub struct PageSpec {
    pub kind: PageKind,
    /// Human label for logs and banners.
    pub title: &'static str,
    pub metric_headers: &'static [&'static str],
    /// Appended after `?page=N`.
    pub url_fragment: &'static str,
    /// Output file name without extension.
    pub file_stem: &'static str,
    pub metrics: MetricsFn,
}

impl PageSpec {
    pub fn for_kind(kind: PageKind) -> &'static PageSpec {
        match kind {
            PageKind::Ranking => &ranking::SPEC,
            PageKind::Scores => &scores::SPEC,
        }
    }

    /// Rank, Name, Location, metrics…, Website.
    pub fn headers(&self) -> Vec<String> {
        let mut h = vec![s!("Rank"), s!("Name"), s!("Location")];
        h.extend(self.metric_headers.iter().map(|m| s!(*m)));
        h.push(s!("Website"));
        h
    }

    pub fn page_url(&self, base_url: &str, page: u32) -> String {
        format!("{base_url}?page={page}{}", self.url_fragment)
    }
}

static ROW: LazyLock<Selector> = LazyLock::new(|| css("tr"));
static RANK: LazyLock<Selector> = LazyLock::new(|| css("td.rank"));
static NAME: LazyLock<Selector> = LazyLock::new(|| css("a.ranking-institution-title"));
static LOCATION: LazyLock<Selector> = LazyLock::new(|| css("div.location"));

/// Parse one rendered page and return the records whose location contains
/// `country`.
pub fn extract(spec: &PageSpec, document: &str, country: &str) -> Vec<Record> {
    let doc = Html::parse_document(document);
    html::select_all(&doc, &ROW)
        .into_iter()
        .filter_map(|row| extract_row(spec, row, country))
        .collect()
}

/// One `<tr>` → `Some(record)` if it passes the country filter.
pub fn extract_row(spec: &PageSpec, row: ElementRef<'_>, country: &str) -> Option<Record> {
    let location = read_location(row);
    if !matches_country(location.as_deref(), country) {
        return None;
    }

    let (name, website) = read_name_and_website(row);
    let mut metrics = (spec.metrics)(row);
    metrics.resize(spec.metric_headers.len(), None);

    Some(Record {
        rank: html::find_text(row, &RANK),
        name,
        location,
        metrics,
        website,
    })
}

/// Plain substring test; "Spain" also matches "New Spain Falls".
pub fn matches_country(location: Option<&str>, country: &str) -> bool {
    location.is_some_and(|loc| loc.contains(country))
}

fn read_location(row: ElementRef<'_>) -> Option<String> {
    html::find_text(row, &LOCATION).map(|t| join_lines(&t))
}

/// Name text plus absolute profile URL. No anchor: neither. Anchor without
/// `href`: name only.
fn read_name_and_website(row: ElementRef<'_>) -> (Option<String>, Option<String>) {
    match html::find(row, &NAME) {
        Some(a) => {
            let website = html::attr(a, "href").map(|href| absolute_url(SITE_ORIGIN, href));
            (Some(html::text_of(a)), website)
        }
        None => (None, None),
    }
}
