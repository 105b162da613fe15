//! Pet and adoption request routes.

use crate::handlers::{create_adoption, get_pet, list_adoptions, list_pets};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn listing_routes(state: AppState) -> Router {
    Router::new()
        .route("/pets", get(list_pets))
        .route("/pets/:id", get(get_pet))
        .route("/adoptions", get(list_adoptions).post(create_adoption))
        .with_state(state)
}
