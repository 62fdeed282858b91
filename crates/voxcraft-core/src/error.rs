use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type so that every endpoint
/// answers with the same error envelope.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Per-field details for validation failures
    fn field_details(&self) -> Option<serde_json::Value> {
        None
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorDetails,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: String,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<serde_json::Value>,
}

/// Render an [`HttpError`] as a JSON error response
pub fn error_response<E: HttpError + ?Sized>(error: &E) -> Response {
    let status = error.status_code();

    let body = ErrorResponse {
        error: ErrorDetails {
            message: error.client_message(),
            r#type: error.error_type().to_string(),
            code: status.as_u16(),
            fields: error.field_details(),
        },
    };

    (status, Json(body)).into_response()
}
