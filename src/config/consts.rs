// src/config/consts.rs

// Site
pub const SITE_ORIGIN: &str = "https://www.timeshighereducation.com";
pub const BASE_URL: &str =
    "https://www.timeshighereducation.com/world-university-rankings/2024/world-ranking";

// Scrape
pub const DEFAULT_COUNTRY: &str = "Spain";
pub const DEFAULT_PAGE_COUNT: u32 = 107;
pub const REQUEST_PAUSE_MS: u64 = 0;

// Browser
pub const NAV_TIMEOUT_SECS: u64 = 30;
pub const IDLE_BROWSER_TIMEOUT_SECS: u64 = 600;
pub const READY_SELECTOR: &str = "tr";

// Export
pub const NOT_AVAILABLE: &str = "N/A";
pub const RANKING_FILE_STEM: &str = "universitiesranking_data";
pub const SCORES_FILE_STEM: &str = "uniscores_data";
