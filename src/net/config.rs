//! Backend base URL configuration.
//!
//! The base URL is baked in at compile time via `TRIEDTHAT_API_URL`; when
//! unset, requests go to the serving origin with relative `/api` paths.

/// Configured backend base URL, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("TRIEDTHAT_API_URL").unwrap_or("")
}

/// Absolute URL for a backend path such as `/api/me`.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}
