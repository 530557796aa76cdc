//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend base URL baked in at build time, e.g. `BACKEND_URL=https://api.example.com trunk build`
const CONFIGURED_BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Get the base URL for API requests
///
/// Uses `BACKEND_URL` from the build environment when it is set. Otherwise
/// the URL is constructed from the current window location, using port 3000
/// for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://api.example.com"
/// - Empty string if no URL is configured and window is not available
pub fn api_base() -> String {
    match normalize_base(CONFIGURED_BACKEND_URL) {
        Some(base) => base,
        None => location_base(),
    }
}

/// Joins a base URL and an absolute path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn normalize_base(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
}

fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}
