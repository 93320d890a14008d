use crate::interface_adapters::handlers::status::{health, status_page};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health))
        .with_state(state)
}
