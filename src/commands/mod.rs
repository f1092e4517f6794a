//! Entry points behind the CLI subcommands.

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::sync::Arc;

use crate::{
    application::RenderAction,
    config::Config,
    download::LinkPolicy,
    server::{self, AppState},
};

/// Serve the landing page on `bind_addr`.
#[tracing::instrument(skip(policy))]
pub async fn serve(site_url: &str, policy: LinkPolicy, bind_addr: &str) -> Result<()> {
    let config = Config::new(site_url, policy)?;
    info!("Reading releases from {}", config.source.feed_url());

    let state = AppState::new(Arc::new(config.source), config.policy);
    server::start(state, bind_addr).await
}

/// Render the landing page once and write the HTML to `out`.
#[tracing::instrument(skip(policy, out))]
pub async fn render<W: Write>(site_url: &str, policy: LinkPolicy, out: &mut W) -> Result<()> {
    let config = Config::new(site_url, policy)?;
    let html = RenderAction::new(&config.source, config.policy)
        .render()
        .await?;

    out.write_all(html.as_bytes())
        .context("Failed to write rendered page")?;
    out.flush().context("Failed to write rendered page")?;
    Ok(())
}
