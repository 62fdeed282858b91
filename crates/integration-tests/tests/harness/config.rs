//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use voxcraft_config::{
    Config, ContentConfig, ContentProviderConfig, ContentProviderType, CorsConfig, HealthConfig, ServerConfig,
    TtsConfig, TtsProviderConfig, TtsProviderType,
};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                tts: TtsConfig::default(),
                content: ContentConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Add an `ElevenLabs` provider pointed at a mock backend
    pub fn with_elevenlabs_provider(mut self, name: &str, base_url: &str) -> Self {
        self.config.tts.providers.insert(
            name.to_owned(),
            TtsProviderConfig {
                provider_type: TtsProviderType::Elevenlabs,
                api_key: Some(SecretString::from("xi-test-key")),
                base_url: Some(base_url.parse().expect("valid URL")),
                timeout_secs: 5,
            },
        );
        self
    }

    /// Add an OpenAI-compatible content provider pointed at a mock backend
    pub fn with_openai_provider(mut self, name: &str, base_url: &str) -> Self {
        self.config.content.providers.insert(
            name.to_owned(),
            ContentProviderConfig {
                provider_type: ContentProviderType::Openai,
                api_key: Some(SecretString::from("sk-test-key")),
                base_url: Some(base_url.parse().expect("valid URL")),
                timeout_secs: 5,
            },
        );
        self
    }

    /// Register an extra voice name
    pub fn with_voice(mut self, name: &str, vendor_id: &str) -> Self {
        self.config.tts.voices.insert(name.to_owned(), vendor_id.to_owned());
        self
    }

    /// Voice used when a request names none
    pub fn with_default_voice(mut self, name: &str) -> Self {
        self.config.tts.default_voice = Some(name.to_owned());
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
