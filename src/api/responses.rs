//! Shared API response helpers
//!
//! Error bodies follow the shape the submission forms expect: a
//! `message` always, plus field-level `errors` on validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::validation::ValidationErrors;

/// 400 with field-level detail
pub fn validation_failure(errors: ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "message": "Invalid data",
            "errors": errors.errors,
        })),
    )
        .into_response()
}

/// Opaque 500; the cause stays in the server log
pub fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}
