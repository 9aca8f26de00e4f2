// src/specs/ranking.rs
//! Scraping *spec* for the default (stats) view of the listing.
//!
//! Columns after Location come from the row's `td.stats*` cells, in order:
//! students, student/staff ratio, international share, female:male ratio,
//! interdisciplinary research share.
//!
//! The five values are all-or-nothing: if the row carries fewer than five
//! stats cells the whole block is `None`, never a partial mix.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::PageSpec;
use crate::config::consts::RANKING_FILE_STEM;
use crate::config::options::PageKind;
use crate::core::html::{self, css};

pub const HEADERS: [&str; 5] = [
    "Number of Students",
    "Student-Staff Ratio",
    "Percentage of International Students",
    "Female to Male Ratio",
    "Percentage of Interdisciplinary Research",
];

pub static SPEC: PageSpec = PageSpec {
    kind: PageKind::Ranking,
    title: "University ranking",
    metric_headers: &HEADERS,
    url_fragment: "#",
    file_stem: RANKING_FILE_STEM,
    metrics: stats,
};

// Cells are e.g. class="stats stats_number_students"
static STATS: LazyLock<Selector> = LazyLock::new(|| css(r#"td[class*="stats"]"#));

fn stats(row: ElementRef<'_>) -> Vec<Option<String>> {
    let cells = html::find_all(row, &STATS);
    if cells.len() < HEADERS.len() {
        return vec![None; HEADERS.len()];
    }
    cells
        .into_iter()
        .take(HEADERS.len())
        .map(|c| Some(html::text_of(c)))
        .collect()
}
