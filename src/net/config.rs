//! Backend endpoint configuration.
//!
//! DESIGN
//! ======
//! Exactly one base URL for the whole client, resolved once at build
//! time from the `MEDTRACK_API_URL` environment variable. Every request
//! in `net` goes through [`api_url`]; no component carries its own
//! host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Development backend used when `MEDTRACK_API_URL` is not set at
/// build time.
const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// The configured backend base URL, without a trailing slash.
pub fn base_url() -> &'static str {
    option_env!("MEDTRACK_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Join a relative path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    join(base_url(), path)
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
