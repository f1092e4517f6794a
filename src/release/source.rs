use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::ReleaseMetadata;
use crate::http::HttpClient;

/// Where the latest release metadata comes from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch the metadata of the latest published release.
    async fn latest(&self) -> Result<ReleaseMetadata>;
}

/// Reads `<site-url>/api/version` over HTTP.
pub struct HttpReleaseSource {
    http: HttpClient,
    feed_url: String,
}

impl HttpReleaseSource {
    #[tracing::instrument(skip(http))]
    pub fn new(http: HttpClient, site_url: &str) -> Self {
        let feed_url = format!("{}/api/version", site_url.trim_end_matches('/'));
        Self { http, feed_url }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    #[tracing::instrument(skip(self))]
    async fn latest(&self) -> Result<ReleaseMetadata> {
        debug!("Fetching release metadata from {}...", self.feed_url);

        let document: serde_json::Value = self.http.get_json(&self.feed_url).await?;
        let metadata = ReleaseMetadata::from_json(document);

        debug!(
            "Latest release {:?} with {} platform(s)",
            metadata.version,
            metadata.platforms.len()
        );
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::FetchError;
    use crate::release::PlatformKey;
    use reqwest::Client;

    fn source_for(url: &str) -> HttpReleaseSource {
        HttpReleaseSource::new(HttpClient::new(Client::new()), url)
    }

    #[test]
    fn test_feed_url_joins_base() {
        assert_eq!(
            source_for("https://uci.example.com").feed_url(),
            "https://uci.example.com/api/version"
        );
        assert_eq!(
            source_for("https://uci.example.com/").feed_url(),
            "https://uci.example.com/api/version"
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_latest_parses_feed() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "version": "1.2.0",
                    "pub_date": "2024-11-02T08:00:00Z",
                    "platforms": {
                        "linux-x86_64": { "url": "https://dl.example.com/uci_1.2.0_amd64.AppImage.tar.gz" }
                    }
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let metadata = source_for(&server.url()).latest().await.unwrap();

        mock.assert_async().await;
        assert_eq!(metadata.version_label(), "1.2.0");
        assert_eq!(
            metadata.artifact_url(PlatformKey::LinuxX86_64),
            Some("https://dl.example.com/uci_1.2.0_amd64.AppImage.tar.gz")
        );
    }

    #[tokio::test]
    async fn test_latest_null_body_is_empty() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/api/version")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("null")
            .create_async()
            .await;

        let metadata = source_for(&server.url()).latest().await.unwrap();
        assert_eq!(metadata, ReleaseMetadata::default());
    }

    #[tokio::test]
    async fn test_latest_propagates_http_failure() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/api/version")
            .with_status(502)
            .expect(1)
            .create_async()
            .await;

        let result = source_for(&server.url()).latest().await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<FetchError>(),
            Some(&FetchError::ServerError(502))
        );
    }
}
