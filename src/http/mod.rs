//! HTTP client module for the upstream release feed.

mod client;
mod status;

pub use client::HttpClient;
pub use status::{FetchError, classify_error, check_status};
