use std::{ops::RangeInclusive, str::FromStr};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    age::AgeCategory,
    emotion::Emotion,
    settings::{VoiceSettings, VoiceSettingsOverrides},
    validation::{FieldErrors, ValidationError},
};

/// Accepted speech rate multipliers
pub const SPEED_RANGE: RangeInclusive<f64> = 0.5..=2.0;
/// Accepted pitch multipliers
pub const PITCH_RANGE: RangeInclusive<f64> = 0.5..=1.5;
/// Accepted clarity values
pub const CLARITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Voice used when the client does not name one
pub const DEFAULT_VOICE: &str = "Aria";
/// Vendor model used when the client does not name one
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

/// A validated speech request
///
/// Only obtainable through [`SpeechRequest::builder`] or
/// [`SpeechPayload::into_request`], so every instance satisfies the
/// text and range checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    text: String,
    voice_name: String,
    model_id: String,
    emotion: Emotion,
    age_category: AgeCategory,
    speed: f64,
    pitch: f64,
    clarity: f64,
    base_settings: VoiceSettings,
}

impl SpeechRequest {
    /// Start building a request for `text` with every other field defaulted
    pub fn builder(text: impl Into<String>) -> SpeechRequestBuilder {
        SpeechRequestBuilder {
            text: text.into(),
            voice_name: DEFAULT_VOICE.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            emotion: Emotion::default(),
            age_category: AgeCategory::default(),
            speed: 1.0,
            pitch: 1.0,
            clarity: 1.0,
            base_settings: VoiceSettings::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// User-facing voice label as sent by the client
    pub fn voice_name(&self) -> &str {
        &self.voice_name
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub const fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub const fn age_category(&self) -> AgeCategory {
        self.age_category
    }

    pub const fn speed(&self) -> f64 {
        self.speed
    }

    pub const fn pitch(&self) -> f64 {
        self.pitch
    }

    pub const fn clarity(&self) -> f64 {
        self.clarity
    }

    /// Settings the emotion and clarity adjustments start from
    pub const fn base_settings(&self) -> &VoiceSettings {
        &self.base_settings
    }
}

/// Builder for programmatic construction of a [`SpeechRequest`]
#[derive(Debug, Clone)]
pub struct SpeechRequestBuilder {
    text: String,
    voice_name: String,
    model_id: String,
    emotion: Emotion,
    age_category: AgeCategory,
    speed: f64,
    pitch: f64,
    clarity: f64,
    base_settings: VoiceSettings,
}

impl SpeechRequestBuilder {
    #[must_use]
    pub fn voice(mut self, voice_name: impl Into<String>) -> Self {
        self.voice_name = voice_name.into();
        self
    }

    #[must_use]
    pub fn model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    #[must_use]
    pub fn emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = emotion;
        self
    }

    #[must_use]
    pub fn age(mut self, age_category: AgeCategory) -> Self {
        self.age_category = age_category;
        self
    }

    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn pitch(mut self, pitch: f64) -> Self {
        self.pitch = pitch;
        self
    }

    #[must_use]
    pub fn clarity(mut self, clarity: f64) -> Self {
        self.clarity = clarity;
        self
    }

    #[must_use]
    pub fn base_settings(mut self, settings: VoiceSettings) -> Self {
        self.base_settings = settings;
        self
    }

    /// Validate and produce the request
    pub fn build(self) -> Result<SpeechRequest, ValidationError> {
        let mut errors = FieldErrors::new();

        errors.require_text("text", Some(&self.text));
        check_voice(&mut errors, &self.voice_name);
        errors.require_text("model_id", Some(&self.model_id));
        check_prosody(&mut errors, self.speed, self.pitch, self.clarity);
        check_settings(&mut errors, &self.base_settings);

        errors.finish(SpeechRequest {
            text: self.text,
            voice_name: self.voice_name,
            model_id: self.model_id,
            emotion: self.emotion,
            age_category: self.age_category,
            speed: self.speed,
            pitch: self.pitch,
            clarity: self.clarity,
            base_settings: self.base_settings,
        })
    }
}

/// Age as sent by older clients: a category name or its numeric factor
#[derive(Debug, Clone, PartialEq)]
pub enum AgeFactorField {
    Factor(f64),
    Name(String),
}

/// Fallbacks applied to fields the client leaves out
#[derive(Debug, Clone)]
pub struct SpeechDefaults {
    pub voice: String,
    pub model_id: String,
}

impl Default for SpeechDefaults {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

/// Speech request body as received over HTTP
///
/// Fields are kept as raw JSON so that validation can report every missing,
/// mistyped or malformed field at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeechPayload {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub voice_id: Option<Value>,
    #[serde(default)]
    pub model_id: Option<Value>,
    #[serde(default)]
    pub emotion: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub age_factor: Option<Value>,
    #[serde(default)]
    pub speed: Option<Value>,
    #[serde(default)]
    pub pitch: Option<Value>,
    #[serde(default)]
    pub clarity: Option<Value>,
    #[serde(default)]
    pub voice_settings: Option<Value>,
}

impl SpeechPayload {
    /// Validate the payload, filling absent fields from `defaults`
    pub fn into_request(self, defaults: &SpeechDefaults) -> Result<SpeechRequest, ValidationError> {
        let mut errors = FieldErrors::new();

        let text = errors.required_text("text", self.text);

        let voice_name = errors
            .string("voice_id", self.voice_id)
            .unwrap_or_else(|| defaults.voice.clone());
        check_voice(&mut errors, &voice_name);

        let model_id = errors
            .string("model_id", self.model_id)
            .unwrap_or_else(|| defaults.model_id.clone());
        errors.require_text("model_id", Some(&model_id));

        let emotion = match errors.string("emotion", self.emotion) {
            None => Emotion::default(),
            Some(tag) => Emotion::from_str(&tag).unwrap_or_else(|_| {
                errors.push("emotion", format!("unknown emotion '{tag}'"));
                Emotion::default()
            }),
        };

        let age = errors.string("age", self.age);
        let age_factor = age_factor_field(&mut errors, self.age_factor);
        let age_category = parse_age(&mut errors, age.as_deref(), age_factor.as_ref());

        let speed = errors.number("speed", self.speed).unwrap_or(1.0);
        let pitch = errors.number("pitch", self.pitch).unwrap_or(1.0);
        let clarity = errors.number("clarity", self.clarity).unwrap_or(1.0);
        check_prosody(&mut errors, speed, pitch, clarity);

        let base_settings = settings_overrides(&mut errors, self.voice_settings)
            .map_or_else(VoiceSettings::default, |overrides| VoiceSettings::default().merged(&overrides));
        check_settings(&mut errors, &base_settings);

        errors.finish(SpeechRequest {
            text: text.unwrap_or_default(),
            voice_name,
            model_id,
            emotion,
            age_category,
            speed,
            pitch,
            clarity,
            base_settings,
        })
    }
}

fn age_factor_field(errors: &mut FieldErrors, value: Option<Value>) -> Option<AgeFactorField> {
    match value? {
        Value::Null => None,
        Value::Number(number) => number.as_f64().map(AgeFactorField::Factor),
        Value::String(name) => Some(AgeFactorField::Name(name)),
        _ => {
            errors.push("age_factor", "must be a number or an age category name");
            None
        }
    }
}

fn settings_overrides(errors: &mut FieldErrors, value: Option<Value>) -> Option<VoiceSettingsOverrides> {
    match value? {
        Value::Null => None,
        Value::Object(mut fields) => Some(VoiceSettingsOverrides {
            stability: errors.number("voice_settings.stability", fields.remove("stability")),
            similarity_boost: errors.number("voice_settings.similarity_boost", fields.remove("similarity_boost")),
            style: errors.number("voice_settings.style", fields.remove("style")),
            use_speaker_boost: errors.boolean("voice_settings.use_speaker_boost", fields.remove("use_speaker_boost")),
        }),
        _ => {
            errors.push("voice_settings", "must be an object");
            None
        }
    }
}

// Dot segments would vanish from the vendor URL path
fn check_voice(errors: &mut FieldErrors, voice: &str) {
    errors.require_text("voice_id", Some(voice));

    if matches!(voice, "." | "..") {
        errors.push("voice_id", format!("'{voice}' is not a valid voice"));
    }
}

fn parse_age(errors: &mut FieldErrors, age: Option<&str>, factor: Option<&AgeFactorField>) -> AgeCategory {
    let from_name = age.and_then(|name| {
        AgeCategory::from_str(name)
            .inspect_err(|_| errors.push("age", format!("unknown age category '{name}'")))
            .ok()
    });

    let from_factor = factor.and_then(|field| {
        let parsed = match field {
            AgeFactorField::Factor(value) => AgeCategory::from_factor(*value),
            AgeFactorField::Name(name) => AgeCategory::from_str(name).ok(),
        };

        if parsed.is_none() {
            errors.push("age_factor", "must be one of 0.7, 0.8, 1.0, 1.2 or an age category name");
        }

        parsed
    });

    match (from_name, from_factor) {
        (Some(name), Some(factor)) if name != factor => {
            errors.push("age_factor", format!("conflicts with age '{name}'"));
            name
        }
        (Some(category), _) | (None, Some(category)) => category,
        (None, None) => AgeCategory::default(),
    }
}

fn check_prosody(errors: &mut FieldErrors, speed: f64, pitch: f64, clarity: f64) {
    errors.check_range("speed", speed, &SPEED_RANGE);
    errors.check_range("pitch", pitch, &PITCH_RANGE);
    errors.check_range("clarity", clarity, &CLARITY_RANGE);
}

// Out-of-range settings are clamped later; only non-finite values are rejected
fn check_settings(errors: &mut FieldErrors, settings: &VoiceSettings) {
    errors.check_finite("voice_settings.stability", settings.stability);
    errors.check_finite("voice_settings.similarity_boost", settings.similarity_boost);
    errors.check_finite("voice_settings.style", settings.style);
}
