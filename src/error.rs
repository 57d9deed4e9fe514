//! Error types for the numbers and grades server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying SQLite call failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("Database connection lock poisoned")]
    LockPoisoned,

    /// The blocking query task was cancelled or panicked
    #[error("Query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

// == Api Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A storage query failed; the message names the operation, not the cause
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl ApiError {
    /// Logs a store failure and wraps it as a `QueryFailed` with a stable message.
    pub fn query_failed(context: &str, source: StoreError) -> Self {
        tracing::error!(error = %source, "{}", context);
        ApiError::QueryFailed(context.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::QueryFailed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Aliases ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
