use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Build the site router.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
