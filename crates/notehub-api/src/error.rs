//! HTTP error mapping for notehub-api.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// API-level error with an HTTP status.
#[derive(Debug)]
pub enum ApiError {
    Internal(notehub_core::Error),
    Forbidden(String),
    NotFound(String),
    BadRequest(String),
    Gone(String),
}

impl From<notehub_core::Error> for ApiError {
    fn from(err: notehub_core::Error) -> Self {
        use notehub_core::Error;
        match &err {
            Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            Error::NoteNotFound(id) => ApiError::NotFound(format!("Note {} not found", id)),
            Error::CollectionNotFound(id) => {
                ApiError::NotFound(format!("Collection {} not found", id))
            }
            Error::UserNotFound(id) => ApiError::NotFound(format!("User {} not found", id)),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            Error::Forbidden(msg) => ApiError::Forbidden(msg.clone()),
            _ => ApiError::Internal(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Gone(msg) => (StatusCode::GONE, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
