//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use trivia_core::{CatalogError, ErrorKind};

pub const BAD_REQUEST_MESSAGE: &str = "Please verify your request parameters";
pub const NOT_FOUND_MESSAGE: &str = "resource not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "HTTP method is not allowed on this route";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred, try again";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request() -> Self {
        Self::BadRequest(BAD_REQUEST_MESSAGE.to_string())
    }

    pub fn not_found() -> Self {
        Self::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed(METHOD_NOT_ALLOWED_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database(_) | ApiError::Migration(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error.kind() {
            ErrorKind::CallerError => ApiError::BadRequest(error.to_string()),
            ErrorKind::NotFound => ApiError::NotFound(error.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub status: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store failures are logged, never shown to the caller.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let body = Json(ErrorResponse {
            success: false,
            status: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
