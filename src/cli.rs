// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::WrapErr;

use crate::config::consts::*;
use crate::config::options::{AppOptions, BrowserOptions, ExportFormat, ExportOptions, PageKind, ScrapeOptions};
use crate::progress::{ConsoleProgress, NullProgress, Progress};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Rank + student statistics
    Ranking,
    /// Rank + pillar scores
    Scores,
    /// Both, one file each
    All,
}

impl Target {
    pub fn kinds(self) -> Vec<PageKind> {
        match self {
            Target::Ranking => vec![PageKind::Ranking],
            Target::Scores => vec![PageKind::Scores],
            Target::All => PageKind::ALL.to_vec(),
        }
    }
}

/// Scrape one country's universities from the THE World University Rankings.
#[derive(Debug, Parser)]
#[command(name = "uni_scrape", version, about)]
pub struct Cli {
    /// Which table view(s) to scrape
    #[arg(value_enum, default_value_t = Target::All)]
    pub target: Target,

    /// Keep rows whose location contains this text (case-sensitive)
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Number of listing pages to walk
    #[arg(long, default_value_t = DEFAULT_PAGE_COUNT)]
    pub pages: u32,

    /// Listing URL, without query string
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Output file, or a directory for the default file name(s)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Xlsx)]
    pub format: ExportFormat,

    /// Seconds to wait for a page to load and render
    #[arg(long, default_value_t = NAV_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pause between pages, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    /// Show the browser window
    #[arg(long)]
    pub headful: bool,

    /// No per-record output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                base_url: self.base_url.clone(),
                country: self.country.clone(),
                page_count: self.pages,
                pause: Duration::from_millis(self.pause_ms),
            },
            browser: BrowserOptions {
                headless: !self.headful,
                nav_timeout: Duration::from_secs(self.timeout_secs),
                ..BrowserOptions::default()
            },
            export: ExportOptions {
                format: self.format,
                out: self.out.clone(),
            },
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.quiet);

    let app = cli.to_options();
    let mut console = ConsoleProgress;
    let mut silent = NullProgress;
    let progress: &mut dyn Progress = if cli.quiet { &mut silent } else { &mut console };

    let summary = crate::runner::run(&app, &cli.target.kinds(), Some(progress))
        .wrap_err("scrape failed")?;

    if cli.quiet {
        for out in &summary.outputs {
            println!("Data saved to '{}' ({} rows)", out.path.display(), out.rows);
        }
    }
    Ok(())
}
