//! Render action - fetches the latest release and renders the landing page.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::download::LinkPolicy;
use crate::page::LandingPage;
use crate::release::ReleaseSource;

/// One page render: exactly one metadata fetch, then pure derivation.
pub struct RenderAction<'a> {
    source: &'a dyn ReleaseSource,
    policy: LinkPolicy,
}

impl<'a> RenderAction<'a> {
    pub fn new(source: &'a dyn ReleaseSource, policy: LinkPolicy) -> Self {
        Self { source, policy }
    }

    /// Fetch the release feed and build the page model.
    pub async fn landing_page(&self) -> Result<LandingPage> {
        let metadata = self
            .source
            .latest()
            .await
            .context("Failed to fetch release metadata")?;

        let page = LandingPage::new(&metadata, self.policy);

        let pending: Vec<&str> = page
            .downloads
            .iter()
            .filter(|d| !d.available)
            .map(|d| d.target.label())
            .collect();
        if pending.is_empty() {
            debug!("All downloads available for {:?}", page.version);
        } else {
            info!("Release {:?} still updating for {}", page.version, pending.join(", "));
        }

        Ok(page)
    }

    /// Fetch the release feed and render the page HTML.
    pub async fn render(&self) -> Result<String> {
        Ok(self.landing_page().await?.render())
    }
}
