//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend base URL baked in at build time, e.g. `SETUP_API_BASE=http://localhost:3000`
const CONFIGURED_API_BASE: Option<&str> = option_env!("SETUP_API_BASE");

/// Get the base URL for API requests
///
/// Uses `SETUP_API_BASE` when it was set at build time. Otherwise requests go
/// to the origin that served the page.
///
/// # Returns
/// - API base URL like "http://localhost:3000", without a trailing slash
/// - Empty string if neither is available (the path is then used as-is)
pub fn api_base() -> String {
    if let Some(base) = normalize_base(CONFIGURED_API_BASE) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// let url = api_url("/api/setup");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn normalize_base(raw: Option<&str>) -> Option<String> {
    let base = raw?.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
