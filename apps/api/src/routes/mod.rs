pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::tools::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Tool API
        .route("/api/v1/tools", get(handlers::handle_list_tools))
        .route("/api/v1/tools/call", post(handlers::handle_call_tool))
        .with_state(state)
}
