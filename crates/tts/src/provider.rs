pub mod elevenlabs;

use async_trait::async_trait;
use voxcraft_core::RequestContext;
use voxcraft_voice::ResolvedRequest;

use crate::types::SpeechAudio;

/// Trait for TTS vendor implementations
///
/// The transport seam of the speech service: the server only ever talks to
/// vendors through this trait, so tests and alternative vendors plug in here.
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize `text` with already-resolved vendor parameters
    async fn synthesize(
        &self,
        text: &str,
        resolved: &ResolvedRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechAudio>;

    /// Get the provider name
    fn name(&self) -> &str;
}
