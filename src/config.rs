use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::{download::LinkPolicy, http::HttpClient, release::HttpReleaseSource};

/// Upper bound for one release feed request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    pub source: HttpReleaseSource,
    pub policy: LinkPolicy,
}

impl Config {
    pub fn new(site_url: &str, policy: LinkPolicy) -> Result<Self> {
        Url::parse(site_url).with_context(|| format!("Invalid site URL: {}", site_url))?;

        let client = Client::builder()
            .user_agent(concat!("uci-site/", env!("UCI_SITE_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let source = HttpReleaseSource::new(HttpClient::new(client), site_url);
        debug!(
            "Release feed at {} with {} link policy",
            source.feed_url(),
            policy
        );

        Ok(Self { source, policy })
    }
}
