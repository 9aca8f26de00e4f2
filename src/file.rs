// src/file.rs
//
// Record sink. One write per run, after the browser is gone; an existing
// file at the target path is replaced.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::error::{Result, ScrapeError};
use crate::store::RecordSet;

/// Write `records` to the path implied by `export` and the pipeline's
/// default `stem`. Returns the path written.
pub fn persist(records: RecordSet, export: &ExportOptions, stem: &str) -> Result<PathBuf> {
    let path = export.out_path(stem);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    match export.format.delimiter() {
        None => write_xlsx(&path, &records)?,
        Some(sep) => {
            let contents = to_export_string(records.headers(), &records.rows(), sep);
            fs::write(&path, contents)?;
        }
    }

    info!(path = %path.display(), rows = records.len(), "records saved");
    Ok(path)
}

/// Single worksheet: bold header row, then one row per record.
pub fn write_xlsx(path: &Path, records: &RecordSet) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();

    for (col, header) in records.headers().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }
    for (i, row) in records.rows().iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            sheet.write_string(r, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::InvalidOption(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
