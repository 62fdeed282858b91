#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use voxcraft_core::ExtractPayload;
use voxcraft_voice::{ResolvedRequest, SpeechPayload};

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use server::{Server, TtsServerBuilder};
pub use types::{AGE_FACTOR_HEADER, PITCH_HEADER, SPEED_HEADER, SpeechAudio, SpeechResponse, VOICE_ID_HEADER};

/// Build the speech server from configuration
pub fn build_server(config: &voxcraft_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for speech generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/api/generate-speech", post(generate_speech))
        .route("/api/resolve-voice", post(resolve_voice))
}

/// Handle speech synthesis requests
async fn generate_speech(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, payload): ExtractPayload<SpeechPayload>,
) -> Result<axum::response::Response> {
    tracing::debug!("Speech handler called for voice: {:?}", payload.voice_id);

    let response = server.generate_speech(payload, &context).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}

/// Handle dry-run resolution requests
async fn resolve_voice(
    State(server): State<Arc<Server>>,
    ExtractPayload(_context, payload): ExtractPayload<SpeechPayload>,
) -> Result<Json<ResolvedRequest>> {
    let (_text, resolved) = server.resolve(payload)?;
    Ok(Json(resolved))
}
