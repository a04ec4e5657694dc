pub mod health;

use axum::{routing::get, Router};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_generate),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}
