//! Build-time client configuration.
//!
//! The bundle is static, so settings are baked in at compile time from the
//! environment of the build (`MEMEFACTORY_API_BASE_URL`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `localStorage` key holding the bearer token between page loads.
pub const TOKEN_STORAGE_KEY: &str = "auth-token";

/// Number of comments shown under a meme before "Show more".
pub const COMMENTS_PREVIEW_LEN: usize = 3;

/// Base URL of the REST backend, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("MEMEFACTORY_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    raw.trim_end_matches('/').to_owned()
}
