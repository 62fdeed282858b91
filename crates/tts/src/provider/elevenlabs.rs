use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use voxcraft_core::RequestContext;
use voxcraft_voice::{ResolvedRequest, VoiceSettings};

use crate::{error::TtsError, http_client::http_client, types::SpeechAudio};

use super::TtsProvider;

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    name: String,
}

impl ElevenLabsProvider {
    pub fn new(
        name: String,
        api_key: SecretString,
        base_url: Option<Url>,
        timeout_secs: u64,
    ) -> crate::error::Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_ELEVENLABS_API_URL)
                .map_err(|e| TtsError::ConfigError(format!("invalid ElevenLabs URL: {e}")))?,
        };

        if base_url.cannot_be_a_base() {
            return Err(TtsError::ConfigError(format!(
                "base URL '{base_url}' for TTS provider '{name}' cannot carry a path"
            )));
        }

        Ok(Self {
            client: http_client(timeout_secs)?,
            base_url,
            api_key,
            name,
        })
    }

    /// `{base_url}/text-to-speech/{voice_id}`, with the voice ID percent-encoded
    fn speech_url(&self, voice_id: &str) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("text-to-speech").push(voice_id);
        }

        url
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(
        &self,
        text: &str,
        resolved: &ResolvedRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechAudio> {
        let url = self.speech_url(&resolved.vendor_voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            resolved.model_id,
            resolved.vendor_voice_id,
            text.len(),
        );

        let body = ElevenLabsRequest {
            text,
            model_id: &resolved.model_id,
            voice_settings: &resolved.settings,
        };

        // BYOK: a caller-supplied key wins over the configured one
        let api_key = context.api_key.as_ref().unwrap_or(&self.api_key);

        let response = self
            .client
            .post(url)
            .header("xi-api-key", api_key.expose_secret())
            .header(http::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(error_text),
                400 => TtsError::InvalidRequest(error_text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::ConnectionError(format!("Failed to read ElevenLabs audio: {e}"))
        })?;

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechAudio {
            audio: audio.to_vec(),
            content_type,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
