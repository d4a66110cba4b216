use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_content::ContentError;
use folio_core::{ErrorBody, ValidationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Handler failure, rendered as `{ "error": string }`
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// Plain-text 404, the resume route is fetched by browsers directly
    #[error("Resume not found")]
    ResumeNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ResumeNotFound => {
                return (StatusCode::NOT_FOUND, "Resume not found").into_response();
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound(_) => AppError::NotFound("Post not found".to_string()),
            ContentError::ResumeNotFound => AppError::ResumeNotFound,
            ContentError::Io(e) => AppError::Internal(e.to_string()),
        }
    }
}
