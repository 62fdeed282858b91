//! OpenAI-compatible chat provider

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use voxcraft_core::RequestContext;

use super::ChatProvider;
use crate::{
    error::ContentError,
    http_client::http_client,
    protocol::{ChatRequest, ChatResponse},
};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible provider
pub struct OpenAiProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl OpenAiProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<Url>,
        timeout_secs: u64,
    ) -> crate::error::Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| ContentError::ConfigError(format!("invalid OpenAI URL: {e}")))?,
        };

        Ok(Self {
            name,
            client: http_client(timeout_secs)?,
            base_url,
            api_key,
        })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, request: &ChatRequest, context: &RequestContext) -> crate::error::Result<String> {
        // Prefer a caller-supplied key over the configured one
        let api_key = context.api_key.as_ref().unwrap_or(&self.api_key);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "upstream request failed");
                ContentError::ConnectionError(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = %self.name, status = %status, "upstream returned error");

            return Err(match status.as_u16() {
                401 => ContentError::AuthenticationFailed(body),
                400 => ContentError::InvalidRequest(body),
                _ => ContentError::ProviderApiError {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let wire_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "failed to parse completion response");
            ContentError::ProviderApiError {
                status: 502,
                message: format!("failed to parse response: {e}"),
            }
        })?;

        wire_response.into_first_content().ok_or(ContentError::EmptyResponse)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
