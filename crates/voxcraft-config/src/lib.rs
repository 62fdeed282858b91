#![allow(clippy::must_use_candidate)]

pub mod content;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use content::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use telemetry::TelemetryConfig;
pub use tts::*;

/// Top-level VoxCraft configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Text-to-speech vendor configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Script/content generation vendor configuration
    #[serde(default)]
    pub content: ContentConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
