//! HTTP error mapping
//!
//! Every error response carries a JSON body of the form `{"detail": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use promptlab::DomainError;

use crate::models::FieldError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Field-level validation failures from a request body
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Unprocessable(String),

    /// Body could not be parsed at all
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                ApiError::NotFound(format!("{entity_type} not found"))
            }
            // A dangling foreign id is the caller's mistake, not a missing resource
            DomainError::InvalidReference { entity_type, .. } => {
                ApiError::BadRequest(format!("{entity_type} not found"))
            }
            DomainError::Validation(message) => ApiError::Unprocessable(message),
            DomainError::Repository(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, serde_json::json!(message)),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, serde_json::json!(message)),
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!(errors))
            }
            ApiError::Unprocessable(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!(message))
            }
            ApiError::Rejected { status, message } => (status, serde_json::json!(message)),
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!("Internal server error"),
                )
            }
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
