//! Build-time configuration.
//!
//! The API base URL is baked in when the bundle is built
//! (`API_BASE_URL=https://api.example.org/api trunk build`); without it the
//! local development backend is used.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

pub fn api_base_url() -> &'static str {
    match option_env!("API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => DEFAULT_API_BASE_URL,
    }
}
