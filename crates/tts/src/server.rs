use std::time::Instant;

use secrecy::SecretString;
use voxcraft_config::{TtsProviderConfig, TtsProviderType};
use voxcraft_core::RequestContext;
use voxcraft_telemetry::VendorMetrics;
use voxcraft_voice::{ResolvedRequest, SpeechDefaults, SpeechPayload, VoiceResolver, VoiceTable};

use crate::{
    error::TtsError,
    provider::{TtsProvider, elevenlabs::ElevenLabsProvider},
    types::SpeechResponse,
};

/// Speech service: validation, voice resolution, then one vendor call
pub struct Server {
    provider: Option<Box<dyn TtsProvider>>,
    resolver: VoiceResolver,
    defaults: SpeechDefaults,
    metrics: VendorMetrics,
}

impl Server {
    pub fn new(provider: Option<Box<dyn TtsProvider>>, resolver: VoiceResolver, defaults: SpeechDefaults) -> Self {
        Self {
            provider,
            resolver,
            defaults,
            metrics: VendorMetrics::new("speech"),
        }
    }

    /// Validate and resolve a payload without calling the vendor
    pub fn resolve(&self, payload: SpeechPayload) -> crate::error::Result<(String, ResolvedRequest)> {
        let request = payload.into_request(&self.defaults)?;
        let resolved = self.resolver.resolve(&request);

        tracing::debug!(
            voice = request.voice_name(),
            vendor_voice_id = %resolved.vendor_voice_id,
            emotion = %request.emotion(),
            age = %request.age_category(),
            "resolved voice parameters"
        );

        Ok((request.text().to_string(), resolved))
    }

    /// Validate, resolve and synthesize speech
    pub async fn generate_speech(
        &self,
        payload: SpeechPayload,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        let (text, resolved) = self.resolve(payload)?;

        let provider = self.provider.as_deref().ok_or(TtsError::NotConfigured)?;

        let start = Instant::now();
        let result = provider.synthesize(&text, &resolved, context).await;
        self.metrics.record(provider.name(), result.is_ok(), start);

        Ok(SpeechResponse {
            audio: result?,
            resolved,
        })
    }
}

/// Builder for constructing the speech server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a voxcraft_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a voxcraft_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let tts = &self.config.tts;

        let provider = match tts.providers.first() {
            Some((name, provider_config)) => {
                tracing::debug!("Initializing TTS provider: {name}");

                let provider: Box<dyn TtsProvider> = match provider_config.provider_type {
                    TtsProviderType::Elevenlabs => Box::new(ElevenLabsProvider::new(
                        name.clone(),
                        resolve_api_key(name, provider_config)?,
                        provider_config.base_url.clone(),
                        provider_config.timeout_secs,
                    )?),
                };

                if tts.providers.len() > 1 {
                    tracing::warn!("Multiple TTS providers configured, only '{name}' serves requests");
                }

                Some(provider)
            }
            None => {
                tracing::debug!("No TTS providers configured");
                None
            }
        };

        let voices = VoiceTable::builtin().with_overrides(&tts.voices);
        tracing::debug!("Voice table initialized with {} voice(s)", voices.len());

        let mut defaults = SpeechDefaults::default();

        if let Some(voice) = &tts.default_voice {
            defaults.voice.clone_from(voice);
        }

        if let Some(model) = &tts.default_model {
            defaults.model_id.clone_from(model);
        }

        Ok(Server::new(provider, VoiceResolver::new(voices), defaults))
    }
}

fn resolve_api_key(name: &str, config: &TtsProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError(format!("API key required for TTS provider '{name}'")))
}
