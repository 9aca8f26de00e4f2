// src/progress.rs
use crate::store::{or_sentinel, Record};

/// Lightweight progress reporting for the page loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the first page with the configured page bound.
    fn begin(&mut self, _total_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called for every record that passed the filter, in arrival order.
    fn record(&mut self, _headers: &[String], _record: &Record) {}

    /// Called after a page has been extracted.
    fn page_done(&mut self, _page: u32, _matched: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints each matched record as `Header: value` lines followed by a rule.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn record(&mut self, headers: &[String], record: &Record) {
        print!("{}", format_record(headers, record));
    }
}

pub fn format_record(headers: &[String], record: &Record) -> String {
    let mut out = String::new();
    for (h, v) in headers.iter().zip(record.values()) {
        out.push_str(&format!("{h}: {}\n", or_sentinel(v)));
    }
    out.push_str("-------------------------\n");
    out
}
