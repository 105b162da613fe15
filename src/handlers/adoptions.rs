//! Adoption request handlers: submit, list.

use crate::error::AppError;
use crate::response::AdoptionCreated;
use crate::state::AppState;
use crate::validation::AdoptionValidator;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// POST /api/adoptions — validate required fields, then a single insert.
/// The referenced pet is not looked up first; the foreign key is the only guard.
pub async fn create_adoption(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "rejected adoption body");
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest("Invalid JSON body".into())
        }
    })?;
    let new = AdoptionValidator::validate(body)?;
    let request = state
        .store
        .create_adoption(&new)
        .await
        .map_err(AppError::store("Failed to submit adoption request"))?;
    tracing::info!(id = request.id, pet_id = request.pet_id, "adoption request submitted");
    Ok((StatusCode::CREATED, Json(AdoptionCreated::new(request))))
}

/// GET /api/adoptions — all requests with pet names, newest first.
pub async fn list_adoptions(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = state
        .store
        .list_adoptions()
        .await
        .map_err(AppError::store("Failed to fetch adoption requests"))?;
    Ok(Json(rows))
}
