// tests/common/mod.rs
//
// Offline stand-ins for the browser: pages are served from memory.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use uni_scrape::core::{NavigateError, Session};

/// What the session saw, readable after it has been moved into the driver.
#[derive(Default)]
pub struct SessionLog {
    pub urls: RefCell<Vec<String>>,
    pub closed: Cell<bool>,
}

/// Serves `pages[i]` for the (i+1)-th navigation. Past the end, or at
/// `timeout_at` (1-based), it reports a timeout like a listing that ran dry.
pub struct FixtureSession {
    pages: Vec<String>,
    timeout_at: Option<usize>,
    served: usize,
    log: Rc<SessionLog>,
}

impl FixtureSession {
    pub fn new(pages: Vec<String>, timeout_at: Option<usize>) -> (Self, Rc<SessionLog>) {
        let log = Rc::new(SessionLog::default());
        let session = Self { pages, timeout_at, served: 0, log: Rc::clone(&log) };
        (session, log)
    }
}

impl Session for FixtureSession {
    fn navigate(&mut self, url: &str) -> Result<String, NavigateError> {
        self.served += 1;
        self.log.urls.borrow_mut().push(url.to_string());
        if self.timeout_at == Some(self.served) || self.served > self.pages.len() {
            return Err(NavigateError::Timeout { url: url.to_string() });
        }
        Ok(self.pages[self.served - 1].clone())
    }
}

impl Drop for FixtureSession {
    fn drop(&mut self) {
        self.log.closed.set(true);
    }
}

/// Builder for one listing `<tr>`. Every part is optional.
#[derive(Clone, Default)]
pub struct Row {
    pub rank: Option<String>,
    pub name: Option<(String, Option<String>)>,
    pub location: Option<String>,
    pub stats: Vec<String>,
    /// (class suffix, value), e.g. ("teaching", "44.0")
    pub scores: Vec<(String, String)>,
}

impl Row {
    pub fn uni(rank: &str, name: &str, href: &str, location: &str) -> Self {
        Row {
            rank: Some(rank.to_string()),
            name: Some((name.to_string(), Some(href.to_string()))),
            location: Some(location.to_string()),
            ..Row::default()
        }
    }

    pub fn with_stats(mut self, stats: &[&str]) -> Self {
        self.stats = stats.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_scores(mut self, scores: &[(&str, &str)]) -> Self {
        self.scores = scores.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self
    }

    pub fn html(&self) -> String {
        let mut out = String::from("<tr>");
        if let Some(r) = &self.rank {
            out.push_str(&format!(r#"<td class="rank sorting_1 sorting_2">{r}</td>"#));
        }
        out.push_str(r#"<td class="name namesearch">"#);
        match &self.name {
            Some((n, Some(href))) => out.push_str(&format!(
                r#"<a href="{href}" class="ranking-institution-title">{n}</a>"#
            )),
            Some((n, None)) => out.push_str(&format!(r#"<a class="ranking-institution-title">{n}</a>"#)),
            None => out.push_str("<span>unnamed</span>"),
        }
        if let Some(l) = &self.location {
            out.push_str(&format!(
                r#"<div class="location"><span><a href="/world-university-rankings/2024/world-ranking?location={l}">{l}</a></span></div>"#
            ));
        }
        out.push_str("</td>");
        for s in &self.stats {
            out.push_str(&format!(r#"<td class="stats stats_number">{s}</td>"#));
        }
        for (k, v) in &self.scores {
            out.push_str(&format!(r#"<td class="scores {k}-score">{v}</td>"#));
        }
        out.push_str("</tr>");
        out
    }
}

/// A rendered listing page with a header row and the given body rows.
pub fn page(rows: &[Row]) -> String {
    let body: String = rows.iter().map(Row::html).collect();
    format!(
        r#"<!DOCTYPE html><html><body><div id="datatable-1_wrapper">
           <table id="datatable-1" class="table dataTable">
             <thead><tr><th class="rank">Rank</th><th class="name">Name</th></tr></thead>
             <tbody>{body}</tbody>
           </table></div></body></html>"#
    )
}
