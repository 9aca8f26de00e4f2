// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{looks_like_dir_hint, AppOptions, PageKind},
    core::browser::{ChromeSession, Session},
    error::{Result, ScrapeError},
    file,
    progress::Progress,
    scrape,
    specs::PageSpec,
};

/// One artifact produced by a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub kind: PageKind,
    pub path: PathBuf,
    pub rows: usize,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outputs: Vec<Output>,
}

/// Top-level runner: each requested pipeline gets its own Chrome session,
/// then its records are written once.
pub fn run(
    app: &AppOptions,
    kinds: &[PageKind],
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    check_output_target(app, kinds)?;

    let mut summary = RunSummary::default();
    for &kind in kinds {
        let session = ChromeSession::launch(&app.browser)?;
        let output = scrape_and_persist(session, PageSpec::for_kind(kind), app, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
        summary.outputs.push(output);
    }
    Ok(summary)
}

/// Full pipeline for one spec with a caller-supplied session:
/// loop → release session → persist.
pub fn scrape_and_persist<S: Session>(
    session: S,
    spec: &PageSpec,
    app: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Output> {
    let records = scrape::run(session, spec, &app.scrape, progress.as_deref_mut().map(|p| p as &mut dyn Progress))?;
    let rows = records.len();
    let path = file::persist(records, &app.export, spec.file_stem)?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Data saved to '{}'", path.display()));
        p.log("Scraping finished.");
    }

    Ok(Output { kind: spec.kind, path, rows })
}

/// Several pipelines cannot share one explicit output file.
fn check_output_target(app: &AppOptions, kinds: &[PageKind]) -> Result<()> {
    match &app.export.out {
        Some(p) if kinds.len() > 1 && !(looks_like_dir_hint(p) || p.is_dir()) => {
            Err(ScrapeError::InvalidOption(format!(
                "--out {} names a file but {} pipelines were requested; pass a directory",
                p.display(),
                kinds.len()
            )))
        }
        _ => Ok(()),
    }
}
