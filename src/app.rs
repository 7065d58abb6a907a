use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/range", get(handlers::get_range))
        .route("/api/overview", get(handlers::get_overview))
        .with_state(state)
}
