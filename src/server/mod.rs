//! HTTP server for the landing page.

mod handlers;
pub mod router;
pub mod state;

use anyhow::{Context, Result};
use log::info;

pub use state::AppState;

/// Bind `bind_addr` and serve the site until the process is stopped.
pub async fn start(state: AppState, bind_addr: &str) -> Result<()> {
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
