use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::ValidationError;

/// Failure envelope agreed with API consumers: a single message under an
/// `"error"` key.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Application-level error taxonomy.
///
/// `details` is internal context for logging only; it is never rendered to
/// the caller.
#[derive(Debug)]
pub enum AppError {
    /// Required-field failure, reported before any write is attempted. 400.
    Validation { message: String, details: Value },
    /// No row for the given identifier. 404.
    NotFound { message: String, details: Value },
    /// The request body could not be parsed. 422.
    Unprocessable { message: String, details: Value },
    /// Storage or other unexpected failure; full detail is logged internally
    /// and the caller sees a generic message. 500.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message, .. } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message, .. } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message, details } => {
                tracing::error!(%message, ?details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::bad_request(e.to_string(), json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::unprocessable(
            "request: unable to parse request payload",
            json!({ "reason": e.body_text() }),
        )
    }
}

/// Storage errors surface unmodified except "no rows", which is normalized to
/// a domain-level not-found. Detail never leaks past the 500 boundary.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("no data found", json!({})),
            e => {
                tracing::error!(error = ?e, "database error");
                AppError::internal("Database error", json!({ "source": e.to_string() }))
            }
        }
    }
}
