//! Liveness and readiness checks.

use crate::response::{HealthBody, ReadyBody};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        message: "Backend is running!",
    })
}

pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}
