// ============================================================================
// Error Handling - Mapping request failures to client responses
// ============================================================================
//
// Caller mistakes (bad JSON, invalid inquiry fields, unknown routes or
// methods) are
// answered with enough detail to fix the request. Storage failures
// are logged server-side with full detail and answered with a generic
// message only: no database errors, connection strings or collection names
// reach the client.
//
// Every error body has the same envelope:
//
//   { "success": false, "error": "<message>", "status": <code>, ... }
//
// ============================================================================

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ValidationError;
use crate::repositories::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("JSON error: {0}")]
    Json(#[from] JsonRejection),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, fields) = match self {
            AppError::Validation(err) => {
                tracing::debug!("Rejected submission: {}", err);
                let fields = serde_json::to_value(err.fields()).ok();
                (StatusCode::BAD_REQUEST, "Validation failed".to_string(), fields)
            }
            AppError::Storage(err) => {
                tracing::error!("Storage error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to submit inquiry".to_string(), None)
            }
            AppError::Json(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, "Invalid JSON".to_string(), None)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg, None),
        };

        let mut body = json!({
            "success": false,
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(fields) = fields {
            body["fields"] = fields;
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
