use gloo_storage::{LocalStorage, Storage};
use shared::config::{resolve_api_base, ApiConfig, PER_PAGE_KEY, VIEW_MODE_KEY};
use shared::gallery::DEFAULT_PER_PAGE;
use shared::ViewMode;

/// Resolves the backend location from the build environment and the page
/// the app was served from.
pub fn load_api_config() -> ApiConfig {
    let location = web_sys::window().map(|window| window.location());
    let hostname = location
        .as_ref()
        .and_then(|location| location.hostname().ok())
        .unwrap_or_default();
    let origin = location
        .as_ref()
        .and_then(|location| location.origin().ok())
        .unwrap_or_default();

    let base = resolve_api_base(option_env!("API_BASE_URL"), &hostname, &origin);
    log::info!("Using API base {}", base);
    ApiConfig::new(base)
}

pub fn load_view_mode() -> ViewMode {
    LocalStorage::get(VIEW_MODE_KEY).unwrap_or_default()
}

pub fn store_view_mode(mode: ViewMode) {
    if let Err(e) = LocalStorage::set(VIEW_MODE_KEY, mode) {
        log::warn!("Failed to persist view mode: {:?}", e);
    }
}

pub fn load_per_page() -> u32 {
    LocalStorage::get(PER_PAGE_KEY).unwrap_or(DEFAULT_PER_PAGE)
}

pub fn store_per_page(per_page: u32) {
    if let Err(e) = LocalStorage::set(PER_PAGE_KEY, per_page) {
        log::warn!("Failed to persist page size: {:?}", e);
    }
}
