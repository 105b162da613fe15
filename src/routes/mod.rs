//! Router assembly: API under `/api`, browser client at `/`.

mod common;
mod listing;

pub use common::common_routes;
pub use listing::listing_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// API routes without prefix: /health, /ready, /pets, /pets/:id, /adoptions.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(listing_routes(state))
}

/// Full application: `/api/*` plus static files from `static_dir`, with CORS, body limit, and request tracing.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
