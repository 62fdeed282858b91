//! Voice parameter mapping for VoxCraft
//!
//! Turns a user-facing speech request (voice name, emotion, age, prosody
//! sliders) into the voice ID and settings a TTS vendor expects. Everything
//! here is pure and synchronous.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod age;
mod emotion;
mod request;
mod resolver;
mod settings;
pub mod validation;
mod voices;

pub use age::AgeCategory;
pub use emotion::Emotion;
pub use request::{
    AgeFactorField, CLARITY_RANGE, DEFAULT_MODEL_ID, DEFAULT_VOICE, PITCH_RANGE, SPEED_RANGE, SpeechDefaults,
    SpeechPayload, SpeechRequest, SpeechRequestBuilder,
};
pub use resolver::{ResolvedRequest, VoiceResolver, resolve};
pub use settings::{VoiceSettings, VoiceSettingsOverrides};
pub use validation::{FieldError, FieldErrors, ValidationError};
pub use voices::VoiceTable;
