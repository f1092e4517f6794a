//! Thin JSON client over reqwest.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::status::check_status;

/// HTTP client for single-shot JSON fetches. Each call performs exactly one
/// request; failures are returned to the caller as-is.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response.error_for_status().map_err(check_status)?;

        let result = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(result)
    }
}
