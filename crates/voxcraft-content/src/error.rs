use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use voxcraft_core::HttpError;
use voxcraft_voice::ValidationError;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Content generation errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum ContentError {
    /// Request failed validation before any vendor call
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Vendor rejected the request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// No chat provider is configured at all
    #[error("Content generation is not configured on this server")]
    NotConfigured,

    /// Provider API returned an error
    #[error("Content generation failed ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Provider answered without any choices
    #[error("Provider returned no content")]
    EmptyResponse,

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

}

impl HttpError for ContentError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::EmptyResponse | Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApiError { status, .. } => match *status {
                400 | 422 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                403 => StatusCode::FORBIDDEN,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(_) | Self::InvalidRequest(_) => "invalid_request_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::NotConfigured => "not_configured_error",
            Self::EmptyResponse | Self::ConnectionError(_) | Self::ProviderApiError { .. } => "api_error",
            Self::ConfigError(_) => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::ConfigError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    fn field_details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Validation(e) => serde_json::to_value(e.fields()).ok(),
            _ => None,
        }
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        voxcraft_core::error_response(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ContentError::NotConfigured.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ContentError::EmptyResponse.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ContentError::ProviderApiError {
                status: 500,
                message: "boom".to_string()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ContentError::from(ValidationError::single("topic", "is required")).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
