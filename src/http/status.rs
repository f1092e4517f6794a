//! Classification of failed upstream responses.

use reqwest::StatusCode;

/// A non-2xx answer from the release feed.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// The feed endpoint does not exist (HTTP 404)
    NotFound(String),
    /// The request was rejected (other 4xx)
    ClientError(u16),
    /// The feed is broken or unreachable behind a proxy (5xx)
    ServerError(u16),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(url) => {
                write!(f, "Release feed not found at {}", url)
            }
            FetchError::ClientError(status) => {
                write!(f, "Release feed rejected the request: HTTP {}", status)
            }
            FetchError::ServerError(status) => {
                write!(f, "Release feed is unavailable: HTTP {}", status)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Maps an error produced by `error_for_status()` to a [`FetchError`].
/// Returns `None` for errors that carry no status (connection, timeout, decode).
pub fn classify_error(error: &reqwest::Error) -> Option<FetchError> {
    let status = error.status()?;
    let url = error
        .url()
        .map(|u| u.to_string())
        .unwrap_or_else(|| "(unknown url)".to_string());

    match status {
        StatusCode::NOT_FOUND => Some(FetchError::NotFound(url)),
        s if s.is_client_error() => Some(FetchError::ClientError(s.as_u16())),
        s if s.is_server_error() => Some(FetchError::ServerError(s.as_u16())),
        _ => None,
    }
}

/// Converts an `error_for_status()` failure into an `anyhow::Error`,
/// preferring the classified [`FetchError`] when there is one.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    match classify_error(&error) {
        Some(fetch_error) => anyhow::Error::from(fetch_error),
        None => anyhow::Error::from(error),
    }
}
