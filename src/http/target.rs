use url::Url;

use crate::error::{AppError, AppResult, HttpError};

/// Checks that `target` is an absolute http(s) URL.
///
/// # Errors
///
/// Returns an error when the URL does not parse or uses another scheme.
pub fn validate_target(target: &str) -> AppResult<()> {
    let parsed = Url::parse(target).map_err(|err| {
        AppError::http(HttpError::InvalidTarget {
            url: target.to_owned(),
            source: err,
        })
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::http(HttpError::UnsupportedScheme {
            url: target.to_owned(),
        })),
    }
}

/// Appends `path` to `target` verbatim; the target is an opaque prefix.
#[must_use]
pub fn request_url(target: &str, path: &str) -> String {
    let mut url = String::with_capacity(target.len().saturating_add(path.len()));
    url.push_str(target);
    url.push_str(path);
    url
}

/// Builds `<target><path>?ts=<timestamp>`, switching to `&ts=` when the
/// path already carries a query string.
#[must_use]
pub fn stamped_url(target: &str, path: &str, timestamp: i64) -> String {
    let base = request_url(target, path);
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{base}{separator}ts={timestamp}")
}
