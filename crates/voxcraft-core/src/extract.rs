use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::{HttpError, RequestContext, error_response};

/// Body limit for JSON requests (1 MiB)
const BODY_LIMIT_BYTES: usize = 1 << 20;

/// Extractor for JSON request bodies plus the request context
pub struct ExtractPayload<T>(pub RequestContext, pub T);

/// Why a request body was refused before reaching a handler
#[derive(Debug, thiserror::Error)]
pub enum PayloadRejection {
    #[error("Unsupported Content-Type, expected: 'Content-Type: application/json'")]
    UnsupportedMediaType,

    #[error("Request body is too large, limit is {BODY_LIMIT_BYTES} bytes")]
    TooLarge,

    #[error("Failed to read request body: {0}")]
    Unreadable(String),

    #[error("Failed to parse request body: {0}")]
    Malformed(String),
}

impl HttpError for PayloadRejection {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Unreadable(_) | Self::Malformed(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        "invalid_request_error"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}

fn is_json(parts: &http::request::Parts) -> bool {
    parts
        .headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T: DeserializeOwned> axum::extract::FromRequest<S> for ExtractPayload<T>
where
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        if !is_json(&parts) {
            return Err(PayloadRejection::UnsupportedMediaType);
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES).await.map_err(|err| {
            if std::error::Error::source(&err).is_some_and(|source| source.is::<http_body_util::LengthLimitError>()) {
                PayloadRejection::TooLarge
            } else {
                PayloadRejection::Unreadable(err.to_string())
            }
        })?;

        let body = serde_json::from_slice::<T>(&bytes).map_err(|e| PayloadRejection::Malformed(e.to_string()))?;

        Ok(Self(RequestContext::from_parts(parts), body))
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::FromRequest;
    use http_body_util::BodyExt;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Ping {
        text: String,
    }

    fn request(content_type: &str, body: &'static str) -> http::Request<Body> {
        http::Request::builder()
            .method(http::Method::POST)
            .header(http::header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_json_with_charset() {
        let req = request("application/json; charset=utf-8", r#"{"text": "hi"}"#);
        let ExtractPayload(_, ping) = ExtractPayload::<Ping>::from_request(req, &()).await.unwrap();
        assert_eq!(ping.text, "hi");
    }

    #[tokio::test]
    async fn rejects_other_content_types() {
        let req = request("text/plain", "hi");
        let Err(rejection) = ExtractPayload::<Ping>::from_request(req, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let req = request("application/json", "{not json");
        let Err(rejection) = ExtractPayload::<Ping>::from_request(req, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_oversized_body() {
        let body = format!(r#"{{"text": "{}"}}"#, "a".repeat(BODY_LIMIT_BYTES));
        let req = http::Request::builder()
            .method(http::Method::POST)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let Err(rejection) = ExtractPayload::<Ping>::from_request(req, &()).await else {
            panic!("expected rejection");
        };
        assert_eq!(rejection.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn rejections_use_the_error_envelope() {
        let req = request("application/json", r#"{"text": 42}"#);
        let Err(rejection) = ExtractPayload::<Ping>::from_request(req, &()).await else {
            panic!("expected rejection");
        };

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[http::header::CONTENT_TYPE], "application/json");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["code"], 400);
        assert!(json["error"]["message"].as_str().unwrap().starts_with("Failed to parse request body"));
    }
}
