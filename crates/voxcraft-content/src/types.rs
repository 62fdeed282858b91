use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Characters of text per estimated second of speech
const CHARS_PER_SECOND: usize = 150;

/// Voices suggested when the model gives none
pub const FALLBACK_VOICES: [&str; 3] = ["Aria", "Sarah", "Roger"];

/// Delivery tips used when the model gives none
pub const FALLBACK_TIPS: [&str; 2] = ["Speak clearly and at a moderate pace", "Use natural pauses for punctuation"];

/// Generated text plus delivery hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub content: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub scenes: Vec<Value>,
    #[serde(default)]
    pub tips: Vec<Value>,
}

impl GeneratedContent {
    /// Interpret model output
    ///
    /// Structured JSON output (optionally inside a Markdown code fence) is
    /// returned as is. Anything else becomes the content of a fallback
    /// document with estimated metadata.
    pub fn from_model_output(raw: &str, voice_suggestions: bool, emotional_cues: bool) -> Self {
        match serde_json::from_str::<Self>(strip_code_fence(raw)) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("model output is not structured content, using fallback: {e}");
                Self::fallback(raw, voice_suggestions, emotional_cues)
            }
        }
    }

    fn fallback(raw: &str, voice_suggestions: bool, emotional_cues: bool) -> Self {
        let estimated_duration = raw.chars().count().div_ceil(CHARS_PER_SECOND);

        let mut metadata = Map::new();
        metadata.insert("estimated_duration".to_string(), Value::from(estimated_duration));
        metadata.insert(
            "recommended_voices".to_string(),
            Value::from(FALLBACK_VOICES.to_vec()),
        );
        metadata.insert("voice_suggestions".to_string(), Value::Bool(voice_suggestions));
        metadata.insert("emotional_cues".to_string(), Value::Bool(emotional_cues));

        Self {
            content: raw.to_string(),
            metadata,
            scenes: Vec::new(),
            tips: FALLBACK_TIPS.iter().map(|tip| Value::from(*tip)).collect(),
        }
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, |inner| inner.trim_start_matches("json").trim())
}
