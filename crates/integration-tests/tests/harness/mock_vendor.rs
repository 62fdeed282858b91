//! Mock vendor backend for integration tests
//!
//! Implements the `ElevenLabs` text-to-speech endpoint and a minimal
//! OpenAI-compatible chat completions endpoint, recording what it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Audio returned by the mock speech endpoint
pub const MOCK_AUDIO: &[u8] = b"ID3\x04mock-audio";

/// A speech request as seen by the vendor
#[derive(Debug, Clone)]
pub struct SpeechCall {
    pub voice_id: String,
    pub api_key: Option<String>,
    pub accept: Option<String>,
    pub body: serde_json::Value,
}

/// A chat completion request as seen by the vendor
#[derive(Debug, Clone)]
pub struct ChatCall {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// How the mock answers
#[derive(Debug, Clone)]
enum Behavior {
    Succeed { chat_content: String },
    Fail { status: StatusCode },
    NoChoices,
}

struct MockState {
    behavior: Behavior,
    speech_calls: Mutex<Vec<SpeechCall>>,
    chat_calls: Mutex<Vec<ChatCall>>,
}

/// Mock vendor that returns predictable responses
pub struct MockVendor {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockVendor {
    /// Start a mock whose chat endpoint answers with `"Hello from mock LLM"`
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with_response("Hello from mock LLM").await
    }

    /// Start a mock whose chat endpoint answers with `content`
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Succeed {
            chat_content: content.to_owned(),
        })
        .await
    }

    /// Start a mock that answers every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Fail {
            status: StatusCode::from_u16(status)?,
        })
        .await
    }

    /// Start a mock whose chat endpoint returns an empty `choices` array
    pub async fn start_without_choices() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::NoChoices).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            speech_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/text-to-speech/{voice_id}", routing::post(handle_speech))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since providers append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Speech requests received so far
    pub fn speech_calls(&self) -> Vec<SpeechCall> {
        self.state.speech_calls.lock().unwrap().clone()
    }

    /// Chat completion requests received so far
    pub fn chat_calls(&self) -> Vec<ChatCall> {
        self.state.chat_calls.lock().unwrap().clone()
    }
}

impl Drop for MockVendor {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

fn failure(status: StatusCode) -> Response {
    (
        status,
        Json(serde_json::json!({
            "detail": {
                "status": "mock_failure",
                "message": "mock server intentional failure"
            }
        })),
    )
        .into_response()
}

async fn handle_speech(
    State(state): State<Arc<MockState>>,
    Path(voice_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.speech_calls.lock().unwrap().push(SpeechCall {
        voice_id,
        api_key: header(&headers, "xi-api-key"),
        accept: header(&headers, "accept"),
        body,
    });

    if let Behavior::Fail { status } = state.behavior {
        return failure(status);
    }

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "audio/mpeg")],
        MOCK_AUDIO,
    )
        .into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let model = body["model"].as_str().unwrap_or("mock-model").to_owned();

    state.chat_calls.lock().unwrap().push(ChatCall {
        authorization: header(&headers, "authorization"),
        body,
    });

    let choices = match &state.behavior {
        Behavior::Fail { status } => return failure(*status),
        Behavior::NoChoices => serde_json::json!([]),
        Behavior::Succeed { chat_content } => serde_json::json!([{
            "index": 0,
            "message": {"role": "assistant", "content": chat_content},
            "finish_reason": "stop"
        }]),
    };

    Json(serde_json::json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": model,
        "choices": choices,
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .into_response()
}
