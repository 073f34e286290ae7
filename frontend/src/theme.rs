use crate::config::Config;
use archive_shared::Theme;
use gloo_storage::{LocalStorage, Storage};
use log::warn;

/// Reads the saved preference. Stored unquoted, so the raw storage API is
/// used rather than gloo's JSON encoding.
pub fn load_theme() -> Theme {
    let stored = LocalStorage::raw()
        .get_item(Config::THEME_STORAGE_KEY)
        .ok()
        .flatten();
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage::raw().set_item(Config::THEME_STORAGE_KEY, theme.as_str()) {
        warn!("Failed to persist theme preference: {:?}", e);
    }
}

/// Sets `data-theme` on the document element; the stylesheet keys off it.
pub fn apply_theme(theme: Theme) {
    if let Err(e) = gloo_utils::document_element().set_attribute("data-theme", theme.as_str()) {
        warn!("Failed to apply theme: {:?}", e);
    }
}

/// Icon for the toggle button: it shows the theme a click switches to.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "fas fa-sun",
        Theme::Light => "fas fa-moon",
    }
}
