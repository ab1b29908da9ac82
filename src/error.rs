use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum DesignerError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid payload: {0}")]
    Validation(String),

    #[error("Database file not found at {}", .0.display())]
    BackupSourceMissing(PathBuf),

    #[error("No baseline registered for `{0}`")]
    UnknownBaseline(String),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Database reset failed: {0}")]
    ResetFailed(#[source] Box<DesignerError>),

    #[error("Admin authorization required")]
    Unauthorized,
}

impl DesignerError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DesignerError::BackupSourceMissing(_) | DesignerError::UnknownBaseline(_)
        )
    }
}

impl From<argon2::password_hash::Error> for DesignerError {
    fn from(e: argon2::password_hash::Error) -> Self {
        DesignerError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for DesignerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            DesignerError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody::new("UNAUTHORIZED", "Admin authorization required."),
            ),
            DesignerError::Validation(reason) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody::new("VALIDATION_ERROR", reason.clone()),
            ),
            DesignerError::BackupSourceMissing(_) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody::new("NOT_FOUND", "Database file not found."),
            ),
            DesignerError::UnknownBaseline(name) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody::new("NOT_FOUND", format!("No defaults exist for `{name}`.")),
            ),
            DesignerError::ResetFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody::new("RESET_FAILED", "Database reset failed."),
            ),
            DesignerError::DatabaseError(_)
            | DesignerError::JsonError(_)
            | DesignerError::IoError(_)
            | DesignerError::PasswordHash(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody::new("INTERNAL_ERROR", "An internal server error occurred."),
            ),
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiErrorBody {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
