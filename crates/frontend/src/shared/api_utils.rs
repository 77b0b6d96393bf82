//! API URL helpers
//!
//! The statistics backend listens on port 3000 of the host that served the
//! bundle.

/// Port of the statistics backend
const API_PORT: u16 = 3000;

/// Base URL for API requests, e.g. `http://localhost:3000`.
///
/// Empty when there is no window (e.g. inside a worker), which leaves
/// relative API paths untouched.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path such as `/api/d410/statistics`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
