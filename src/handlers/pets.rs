//! Pet listing handlers: list all, read one.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub const PET_NOT_FOUND: &str = "Pet not found";

/// GET /api/pets — all pets, newest first.
pub async fn list_pets(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let pets = state
        .store
        .list_pets()
        .await
        .map_err(AppError::store("Failed to fetch pets"))?;
    Ok(Json(pets))
}

/// GET /api/pets/:id — one pet. Ids that cannot name a row are reported as not found.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id: i32 = id_str
        .trim()
        .parse()
        .map_err(|_| AppError::NotFound(PET_NOT_FOUND.into()))?;
    let pet = state
        .store
        .get_pet(id)
        .await
        .map_err(AppError::store("Failed to fetch pet"))?
        .ok_or_else(|| AppError::NotFound(PET_NOT_FOUND.into()))?;
    Ok(Json(pet))
}
