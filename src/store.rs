// src/store.rs
//
// In-memory result types.
//
// - Record:    one matched university row. Absent values stay `None` all the
//              way here; the "N/A" sentinel only appears via `cells()`.
// - RecordSet: headers + append-only records, owned by the driver for a run
//              and handed to the sink once at the end.

use crate::config::consts::NOT_AVAILABLE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub rank: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Page-specific columns between Location and Website, in header order.
    pub metrics: Vec<Option<String>>,
    pub website: Option<String>,
}

impl Record {
    /// Number of columns this record occupies.
    pub fn width(&self) -> usize {
        4 + self.metrics.len()
    }

    /// Values in column order: Rank, Name, Location, metrics…, Website.
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        [self.rank.as_deref(), self.name.as_deref(), self.location.as_deref()]
            .into_iter()
            .chain(self.metrics.iter().map(|m| m.as_deref()))
            .chain(std::iter::once(self.website.as_deref()))
    }

    /// Export row with the sentinel filled in.
    pub fn cells(&self) -> Vec<String> {
        self.values().map(|v| s!(or_sentinel(v))).collect()
    }
}

pub fn or_sentinel(v: Option<&str>) -> &str {
    v.unwrap_or(NOT_AVAILABLE)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSet {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, records: Vec::new() }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: Record) {
        debug_assert_eq!(record.width(), self.headers.len(), "record width must match headers");
        self.records.push(record);
    }

    pub fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for r in records {
            self.push(r);
        }
    }

    /// Value of the named column for record `idx`. Outer `None`: no such
    /// record or column. Inner `None`: the value was not available.
    pub fn field(&self, idx: usize, column: &str) -> Option<Option<&str>> {
        let col = self.headers.iter().position(|h| h == column)?;
        self.records.get(idx)?.values().nth(col)
    }

    /// Sentinel-filled rows for delimited or spreadsheet export.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(Record::cells).collect()
    }
}
