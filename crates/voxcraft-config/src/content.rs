use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Script/content generation configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Chat completion providers keyed by name; the first one serves requests
    #[serde(default)]
    pub providers: IndexMap<String, ContentProviderConfig>,
    /// Model requested from the provider
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature (0.0 to 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            providers: IndexMap::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Configuration for a single chat completion provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentProviderConfig {
    /// Provider protocol type
    #[serde(rename = "type")]
    pub provider_type: ContentProviderType,
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Request timeout in seconds
    #[serde(default = "crate::tts::default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Supported chat completion protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentProviderType {
    /// OpenAI-compatible chat completions API
    Openai,
}

fn default_model() -> String {
    "gpt-4.1-2025-04-14".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f32 {
    0.8
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    2000
}
