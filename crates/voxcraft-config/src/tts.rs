use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// TTS provider configurations keyed by name; the first one serves requests
    #[serde(default)]
    pub providers: IndexMap<String, TtsProviderConfig>,
    /// Voice used when a request names none (defaults to "Aria")
    #[serde(default)]
    pub default_voice: Option<String>,
    /// Vendor model used when a request names none
    #[serde(default)]
    pub default_model: Option<String>,
    /// Extra or overriding voice name to vendor ID mappings
    #[serde(default)]
    pub voices: IndexMap<String, String>,
}

/// Configuration for a single TTS provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TtsProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Supported TTS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// `ElevenLabs`
    Elevenlabs,
}

#[allow(clippy::missing_const_for_fn)]
pub(crate) fn default_timeout_secs() -> u64 {
    120
}
