use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::error;

use super::state::AppState;
use crate::application::RenderAction;
use crate::page::render_error_page;

/// GET / - the landing page, rendered from a fresh release feed fetch.
pub async fn index(State(state): State<AppState>) -> Response {
    let action = RenderAction::new(state.source.as_ref(), state.policy);

    match action.render().await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render landing page: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error_page())).into_response()
        }
    }
}
