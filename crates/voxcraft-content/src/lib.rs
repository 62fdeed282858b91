#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod prompt;
mod protocol;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use voxcraft_core::ExtractPayload;

pub use error::{ContentError, Result};
pub use protocol::{ChatMessage, ChatRequest};
pub use provider::ChatProvider;
pub use request::{ContentLength, ContentPayload, ContentRequest, ContentType};
pub use server::{CompletionSettings, ContentServerBuilder, Server};
pub use types::GeneratedContent;

/// Build the content generation server from configuration
pub fn build_server(config: &voxcraft_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        ContentServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize content server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for content generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/api/ai-content-generator", post(generate))
}

/// Handle content generation requests
async fn generate(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, payload): ExtractPayload<ContentPayload>,
) -> Result<Json<GeneratedContent>> {
    let content = server.generate(payload, &context).await?;

    tracing::debug!("Content generation complete, {} chars", content.content.len());

    Ok(Json(content))
}
