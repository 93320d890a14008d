use crate::domain::StatusPage;
use crate::interface_adapters::state::AppState;
use crate::use_cases::places::pick_place;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

#[tracing::instrument(
    name = "status_page",
    skip_all,
    fields(channel = %state.status.channel)
)]
pub async fn status_page(State(state): State<Arc<AppState>>) -> Response {
    // Resolve liveness first; any upstream failure fails closed.
    let is_live = match state.status.execute().await {
        Ok(is_live) => is_live,
        Err(e) => {
            tracing::error!(error = %e, "failed to resolve channel status.");
            return (StatusCode::UNAUTHORIZED, e.to_string()).into_response();
        }
    };

    let page = StatusPage {
        is_live,
        place: pick_place(&mut rand::rng()).to_string(),
    };

    match state.renderer.render(&page) {
        Ok(html) => {
            tracing::debug!(is_live, "status page rendered.");
            Html(html).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to render status page.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error rendering template: {e}"),
            )
                .into_response()
        }
    }
}

// Process liveness; never touches Twitch.
pub async fn health() -> &'static str {
    "ok"
}
