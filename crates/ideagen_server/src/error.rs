//! Mapping failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ideagen_error::{GenerationError, ValidationError, ValidationErrorKind};
use serde_json::{Value, json};
use tracing::{error, warn};

/// Shown when the upstream error is JSON without `error.message`.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Shown when there is no upstream message at all.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors a route can answer with.
#[derive(Debug, derive_more::From)]
pub enum ApiError {
    /// 400
    Validation(ValidationError),
    /// 503
    Generation(GenerationError),
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::new(ValidationErrorKind::MalformedBody(
            rejection.body_text(),
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(err) => {
                warn!(error = %err, "Rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": err.kind.to_string() })),
                )
                    .into_response()
            }
            ApiError::Generation(err) => {
                error!(error = %err, "Gemini API error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "error": shape_error_message(&err.upstream_message()) })),
                )
                    .into_response()
            }
        }
    }
}

/// Reduce an upstream error message to something fit for a caller.
///
/// Gemini reports failures as JSON with an `error.message` field. When the
/// message parses as JSON, that field is surfaced, or a generic sentence if it
/// is missing. Anything else is passed through unchanged.
///
/// # Examples
///
/// ```
/// use ideagen_server::shape_error_message;
///
/// let raw = r#"{"error":{"code":503,"message":"The model is overloaded."}}"#;
/// assert_eq!(shape_error_message(raw), "The model is overloaded.");
/// assert_eq!(shape_error_message("socket hang up"), "socket hang up");
/// ```
pub fn shape_error_message(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or(UNEXPECTED_ERROR)
            .to_string(),
        Err(_) if raw.is_empty() => UNKNOWN_ERROR.to_string(),
        Err(_) => raw.to_string(),
    }
}
