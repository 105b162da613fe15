//! Common routes: health, readiness.

use crate::handlers::{health, ready};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
