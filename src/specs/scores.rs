// src/specs/scores.rs
//! Scraping *spec* for the "scores" column view.
//!
//! Six pillar scores, each looked up on its own `td.scores.<pillar>-score`
//! cell. A missing cell blanks only that score.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::PageSpec;
use crate::config::consts::SCORES_FILE_STEM;
use crate::config::options::PageKind;
use crate::core::html::{self, css};

pub const HEADERS: [&str; 6] = [
    "Overall Score",
    "Teaching Score",
    "Research Environment Score",
    "Research Quality Score",
    "Industry Score",
    "International Outlook Score",
];

pub static SPEC: PageSpec = PageSpec {
    kind: PageKind::Scores,
    title: "University scores",
    metric_headers: &HEADERS,
    url_fragment: "#!/length/25/sort_by/rank/sort_order/asc/cols/scores",
    file_stem: SCORES_FILE_STEM,
    metrics: scores,
};

// Same order as HEADERS. The site still calls research quality "citations".
static CELLS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    [
        css("td.scores.overall-score"),
        css("td.scores.teaching-score"),
        css("td.scores.research-score"),
        css("td.scores.citations-score"),
        css("td.scores.industry_income-score"),
        css("td.scores.international_outlook-score"),
    ]
});

fn scores(row: ElementRef<'_>) -> Vec<Option<String>> {
    CELLS.iter().map(|sel| html::find_text(row, sel)).collect()
}
