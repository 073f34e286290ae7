use crate::api::api_url;

pub struct Config;

impl Config {
    /// Quiet period before a search edit is applied.
    pub const SEARCH_DEBOUNCE_MS: u32 = 300;

    /// Local-storage key holding the raw `"light"`/`"dark"` preference.
    pub const THEME_STORAGE_KEY: &'static str = "theme";

    pub const DEFAULT_DATASET_PATH: &'static str = "uiu_contest_archive.json";

    pub fn api_base_url() -> String {
        // Relative by default: the archive JSON is served next to index.html
        option_env!("ARCHIVE_BASE_URL").unwrap_or("").to_string()
    }

    /// Where the archive document is fetched from. `ARCHIVE_DATASET_PATH`
    /// overrides the file name at build time.
    pub fn dataset_url() -> String {
        api_url(option_env!("ARCHIVE_DATASET_PATH").unwrap_or(Self::DEFAULT_DATASET_PATH))
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
