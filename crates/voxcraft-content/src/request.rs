use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString, IntoStaticStr, VariantNames};
use voxcraft_voice::{FieldErrors, ValidationError};

/// Default delivery style
pub const DEFAULT_STYLE: &str = "conversational";
/// Default target audience
pub const DEFAULT_AUDIENCE: &str = "general audience";

/// Kind of text to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContentType {
    Script,
    Dialogue,
    Narration,
    Podcast,
    Story,
}

/// Target length bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, IntoStaticStr, VariantNames)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    /// Word range asked of the model
    pub const fn word_range(self) -> &'static str {
        match self {
            Self::Short => "100-200 words",
            Self::Medium => "300-500 words",
            Self::Long => "600-1000 words",
        }
    }
}

/// Content generation body as received over HTTP
///
/// Raw JSON per field, so type mismatches are reported alongside the other
/// validation failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPayload {
    #[serde(default, rename = "type")]
    pub content_type: Option<Value>,
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(default)]
    pub audience: Option<Value>,
    #[serde(default)]
    pub voice_suggestions: Option<Value>,
    #[serde(default)]
    pub emotional_cues: Option<Value>,
    #[serde(default)]
    pub pronunciation_guides: Option<Value>,
}

/// A validated content generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub content_type: ContentType,
    pub topic: String,
    pub style: String,
    pub length: ContentLength,
    pub audience: String,
    pub voice_suggestions: bool,
    pub emotional_cues: bool,
    pub pronunciation_guides: bool,
}

impl ContentPayload {
    /// Validate the payload, reporting every offending field
    pub fn into_request(self) -> Result<ContentRequest, ValidationError> {
        let mut errors = FieldErrors::new();

        let content_type = match self.content_type {
            None | Some(Value::Null) => {
                errors.push("type", "is required");
                None
            }
            raw => errors.string("type", raw).and_then(|raw| {
                raw.trim()
                    .parse::<ContentType>()
                    .map_err(|_| errors.push("type", one_of(&raw, ContentType::VARIANTS)))
                    .ok()
            }),
        };

        let topic = errors.required_text("topic", self.topic);

        let length = match self.length {
            None | Some(Value::Null) => Some(ContentLength::default()),
            raw => errors.string("length", raw).and_then(|raw| {
                raw.trim()
                    .parse::<ContentLength>()
                    .map_err(|_| errors.push("length", one_of(&raw, ContentLength::VARIANTS)))
                    .ok()
            }),
        };

        let style = errors.string("style", self.style);
        let audience = errors.string("audience", self.audience);
        let voice_suggestions = errors.boolean("voice_suggestions", self.voice_suggestions);
        let emotional_cues = errors.boolean("emotional_cues", self.emotional_cues);
        let pronunciation_guides = errors.boolean("pronunciation_guides", self.pronunciation_guides);

        let request = match (content_type, length) {
            (Some(content_type), Some(length)) => Some(ContentRequest {
                content_type,
                topic: topic.unwrap_or_default().trim().to_string(),
                style: or_default(style, DEFAULT_STYLE),
                length,
                audience: or_default(audience, DEFAULT_AUDIENCE),
                voice_suggestions: voice_suggestions.unwrap_or(true),
                emotional_cues: emotional_cues.unwrap_or(true),
                pronunciation_guides: pronunciation_guides.unwrap_or(false),
            }),
            _ => None,
        };

        // A missing request always comes with at least one recorded error
        match errors.finish(request)? {
            Some(request) => Ok(request),
            None => Err(ValidationError::single("type", "is required")),
        }
    }
}

fn one_of(raw: &str, variants: &[&str]) -> String {
    format!("must be one of {}, got '{raw}'", variants.join(", "))
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
