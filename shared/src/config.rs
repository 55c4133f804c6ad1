//! Where the backend lives and how long to wait for it.

use crate::gallery::GalleryQuery;

pub const LOCAL_API_BASE: &str = "http://localhost:5000";
pub const SUBMIT_TIMEOUT_MS: u32 = 60_000;
pub const LIST_TIMEOUT_MS: u32 = 30_000;
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const VIEW_MODE_KEY: &str = "project_tracker.view_mode";
pub const PER_PAGE_KEY: &str = "project_tracker.per_page";

/// Picks the API base URL: an explicit build-time value wins, local
/// development talks to the dev server, anything else is same-origin.
pub fn resolve_api_base(configured: Option<&str>, hostname: &str, origin: &str) -> String {
    let base = match configured.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value,
        None if matches!(hostname, "localhost" | "127.0.0.1") => LOCAL_API_BASE,
        None => origin,
    };
    base.trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn submit_url(&self) -> String {
        format!("{}/api/submit", self.base_url)
    }

    pub fn submissions_url(&self, query: &GalleryQuery) -> String {
        format!("{}/api/public/submissions?{}", self.base_url, query.to_query_string())
    }

    /// Absolute URL for a stored artifact path.
    pub fn asset_url(&self, path: &str) -> String {
        let path = path.replace('\\', "/");
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_base_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), "localhost", "http://localhost:8080"),
            "https://api.example.com"
        );
    }

    #[test]
    fn local_hosts_use_dev_server() {
        assert_eq!(resolve_api_base(None, "localhost", "http://localhost:8080"), LOCAL_API_BASE);
        assert_eq!(resolve_api_base(Some("  "), "127.0.0.1", "http://127.0.0.1:8080"), LOCAL_API_BASE);
    }

    #[test]
    fn deployed_hosts_are_same_origin() {
        assert_eq!(
            resolve_api_base(None, "tracker.example.org", "https://tracker.example.org"),
            "https://tracker.example.org"
        );
    }

    #[test]
    fn builds_endpoint_urls() {
        let config = ApiConfig::new("http://localhost:5000/");
        assert_eq!(config.submit_url(), "http://localhost:5000/api/submit");
        assert_eq!(
            config.submissions_url(&GalleryQuery::default()),
            "http://localhost:5000/api/public/submissions?page=1&per_page=9&search=&sort_by=timestamp&order=desc"
        );
        assert_eq!(
            config.asset_url("uploads\\a_screenshot.png"),
            "http://localhost:5000/uploads/a_screenshot.png"
        );
        assert_eq!(config.asset_url("/uploads/x.zip"), "http://localhost:5000/uploads/x.zip");
    }
}
