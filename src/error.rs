//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    /// Insert rejected because the referenced row does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
}

impl StoreError {
    /// Classify a driver error, separating foreign-key rejections from other failures.
    pub fn from_insert(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                StoreError::ForeignKey(db.message().to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    /// Storage failure; `context` is the only text the caller sees.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    /// Wrap a store failure with a fixed caller-facing message, for use with `map_err`.
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(m) | AppError::NotFound(m) => m,
            AppError::PayloadTooLarge => AppError::PayloadTooLarge.to_string(),
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "{}", context);
                context.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
