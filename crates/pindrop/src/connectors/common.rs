//! Common HTTP utilities shared by the API clients.

use crate::error::Error;
use reqwest::Client;
use std::time::Duration;

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates the configured HTTP client used against both services.
#[must_use]
pub fn create_http_client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Maps a non-success HTTP response to an error.
///
/// Auth rejections get their own variant regardless of which call failed;
/// everything else goes through `fallback` so the caller keeps its
/// operation-specific variant.
pub fn handle_http_error(
    status_code: u16,
    error_body: &str,
    service_name: &str,
    fallback: fn(String) -> Error,
) -> Error {
    match status_code {
        401 | 403 => Error::Authentication(format!(
            "{} rejected the token: {}",
            service_name, error_body
        )),
        _ => fallback(format!(
            "{} error {}: {}",
            service_name, status_code, error_body
        )),
    }
}
