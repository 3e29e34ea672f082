//! API error types with HTTP response mapping.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inference::{InferenceError, ValidationErrors, Violation};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The payload decoded but failed field validation.
    Validation(ValidationErrors),
    /// The body is not JSON of the expected shape.
    Decode(serde_json::Error),
    /// The body could not be read at all, e.g. it exceeds the size limit.
    Body(BytesRejection),
    /// Scoring failed after validation passed.
    Inference(InferenceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => validation_response(errors.into_violations()),
            ApiError::Decode(err) => {
                let message = format!("invalid JSON: {err}");
                validation_response(vec![Violation::new("body", message)])
            }
            ApiError::Body(rejection) => error_response(rejection.status(), rejection.body_text()),
            ApiError::Inference(err) => {
                tracing::error!(error = %err, "scoring failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

fn validation_response(violations: Vec<Violation>) -> Response {
    let body = serde_json::json!({
        "error": "validation failed",
        "violations": violations,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, axum::Json(body)).into_response()
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Validation(errors) => ApiError::Validation(errors),
            other => ApiError::Inference(other),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}
