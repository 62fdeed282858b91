use std::sync::Arc;

use serde::Serialize;

use crate::{
    request::SpeechRequest,
    settings::{VoiceSettings, clamp_unit},
    voices::VoiceTable,
};

/// Vendor-ready parameters derived from a [`SpeechRequest`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRequest {
    /// Vendor voice ID, or the client's voice name when it is not in the table
    pub vendor_voice_id: String,
    pub model_id: String,
    #[serde(rename = "voice_settings")]
    pub settings: VoiceSettings,
    /// Fixed multiplier for the requested age category
    pub age_factor: f64,
    pub speed: f64,
    pub pitch: f64,
}

/// Map a validated request onto vendor settings
///
/// Pure and deterministic: the same inputs always produce the same output,
/// and every settings field lands in `[0, 1]`.
pub fn resolve(request: &SpeechRequest, base: &VoiceSettings, voices: &VoiceTable) -> ResolvedRequest {
    let vendor_voice_id = voices.vendor_id(request.voice_name()).map_or_else(
        || {
            tracing::debug!(voice = request.voice_name(), "unknown voice, passing name through as vendor ID");
            request.voice_name().to_string()
        },
        str::to_string,
    );

    let emotion = request.emotion();

    let settings = VoiceSettings {
        stability: clamp_unit(base.stability + emotion.stability_delta()),
        similarity_boost: clamp_unit(base.similarity_boost * request.clarity()),
        style: clamp_unit(base.style + emotion.style_delta()),
        use_speaker_boost: true,
    };

    ResolvedRequest {
        vendor_voice_id,
        model_id: request.model_id().to_string(),
        settings,
        age_factor: request.age_category().factor(),
        speed: request.speed(),
        pitch: request.pitch(),
    }
}

/// Resolver bound to a shared voice table
///
/// Cheap to clone and safe to share across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct VoiceResolver {
    voices: Arc<VoiceTable>,
}

impl VoiceResolver {
    pub fn new(voices: VoiceTable) -> Self {
        Self {
            voices: Arc::new(voices),
        }
    }

    pub fn voices(&self) -> &VoiceTable {
        &self.voices
    }

    /// Resolve using the request's own base settings
    pub fn resolve(&self, request: &SpeechRequest) -> ResolvedRequest {
        resolve(request, request.base_settings(), &self.voices)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{AgeCategory, Emotion};

    fn request(emotion: Emotion) -> SpeechRequest {
        SpeechRequest::builder("Hello there").emotion(emotion).build().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn known_voice_resolves_to_vendor_id() {
        let request = SpeechRequest::builder("Hi").voice("Aria").build().unwrap();
        let resolved = resolve(&request, &VoiceSettings::default(), &VoiceTable::builtin());
        assert_eq!(resolved.vendor_voice_id, "9BWtsMINqrJLrRacOk9x");
    }

    #[test]
    fn unknown_voice_passes_through() {
        let request = SpeechRequest::builder("Hi").voice("Zog").build().unwrap();
        let resolved = resolve(&request, &VoiceSettings::default(), &VoiceTable::builtin());
        assert_eq!(resolved.vendor_voice_id, "Zog");
    }

    #[test]
    fn neutral_keeps_base_settings() {
        let resolved = resolve(&request(Emotion::Neutral), &VoiceSettings::default(), &VoiceTable::builtin());

        assert_eq!(resolved.settings.stability, 0.5);
        assert_eq!(resolved.settings.similarity_boost, 0.75);
        assert_eq!(resolved.settings.style, 0.0);
        assert!(resolved.settings.use_speaker_boost);
    }

    #[test]
    fn emotion_deltas() {
        let base = VoiceSettings::default();
        let voices = VoiceTable::builtin();
        let neutral = resolve(&request(Emotion::Neutral), &base, &voices).settings;

        let excited = resolve(&request(Emotion::Excited), &base, &voices).settings;
        assert!(close(excited.stability - neutral.stability, 0.2));
        assert_eq!(excited.style, neutral.style);

        let calm = resolve(&request(Emotion::Calm), &base, &voices).settings;
        assert!(close(calm.stability - neutral.stability, -0.2));

        let dramatic = resolve(&request(Emotion::Dramatic), &base, &voices).settings;
        assert!(close(dramatic.style - neutral.style, 0.3));
        assert_eq!(dramatic.stability, neutral.stability);
    }

    #[test]
    fn other_emotions_do_not_change_settings() {
        let base = VoiceSettings::default();
        let voices = VoiceTable::builtin();
        let neutral = resolve(&request(Emotion::Neutral), &base, &voices).settings;

        for emotion in [Emotion::Happy, Emotion::Sad, Emotion::Angry, Emotion::Worried, Emotion::Confident] {
            assert_eq!(resolve(&request(emotion), &base, &voices).settings, neutral);
        }
    }

    #[test]
    fn stability_is_clamped_at_both_ends() {
        let voices = VoiceTable::builtin();

        let high = VoiceSettings {
            stability: 0.95,
            ..VoiceSettings::default()
        };
        assert_eq!(resolve(&request(Emotion::Excited), &high, &voices).settings.stability, 1.0);

        let low = VoiceSettings {
            stability: 0.1,
            ..VoiceSettings::default()
        };
        assert_eq!(resolve(&request(Emotion::Calm), &low, &voices).settings.stability, 0.0);

        let extreme = VoiceSettings {
            stability: 42.0,
            similarity_boost: -3.0,
            style: 7.5,
            use_speaker_boost: false,
        };
        let settings = resolve(&request(Emotion::Dramatic), &extreme, &voices).settings;
        assert_eq!(settings.stability, 1.0);
        assert_eq!(settings.similarity_boost, 0.0);
        assert_eq!(settings.style, 1.0);
        assert!(settings.use_speaker_boost);
    }

    #[test]
    fn similarity_scales_with_clarity() {
        let voices = VoiceTable::builtin();

        for base_similarity in [0.0, 0.3, 0.75, 1.0] {
            for clarity in [0.0, 0.25, 0.5, 0.9, 1.0] {
                let base = VoiceSettings {
                    similarity_boost: base_similarity,
                    ..VoiceSettings::default()
                };
                let request = SpeechRequest::builder("Hi").clarity(clarity).build().unwrap();
                let out = resolve(&request, &base, &voices).settings.similarity_boost;

                assert_eq!(out, base_similarity * clarity);
                assert!((0.0..=1.0).contains(&out));
            }
        }
    }

    #[test]
    fn age_factor_table() {
        let voices = VoiceTable::builtin();
        let base = VoiceSettings::default();
        let expected = [
            (AgeCategory::Child, 0.7),
            (AgeCategory::Teen, 0.8),
            (AgeCategory::Adult, 1.0),
            (AgeCategory::Senior, 1.2),
        ];

        for (age, factor) in expected {
            let aged = SpeechRequest::builder("Hi").age(age).build().unwrap();
            let resolved = resolve(&aged, &base, &voices);
            assert_eq!(resolved.age_factor, factor);
            assert_eq!(resolved.settings, resolve(&request(Emotion::Neutral), &base, &voices).settings);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let request = SpeechRequest::builder("Same input")
            .voice("Charlotte")
            .emotion(Emotion::Dramatic)
            .age(AgeCategory::Senior)
            .speed(1.3)
            .pitch(0.9)
            .clarity(0.42)
            .build()
            .unwrap();
        let resolver = VoiceResolver::default();

        let first = resolver.resolve(&request);
        let second = resolver.resolve(&request);

        assert_eq!(first, second);
        assert_eq!(first.settings.stability.to_bits(), second.settings.stability.to_bits());
        assert_eq!(first.settings.similarity_boost.to_bits(), second.settings.similarity_boost.to_bits());
        assert_eq!(first.settings.style.to_bits(), second.settings.style.to_bits());
    }

    #[test]
    fn prosody_is_surfaced() {
        let request = SpeechRequest::builder("Hi").speed(1.5).pitch(0.8).build().unwrap();
        let resolved = VoiceResolver::default().resolve(&request);

        assert_eq!(resolved.speed, 1.5);
        assert_eq!(resolved.pitch, 0.8);
        assert_eq!(resolved.model_id, "eleven_multilingual_v2");
    }

    #[test]
    fn resolver_uses_configured_table() {
        let resolver = VoiceResolver::new(VoiceTable::builtin().with_overrides([("Zog", "zog-vendor-id")]));
        let request = SpeechRequest::builder("Hi").voice("Zog").build().unwrap();

        assert_eq!(resolver.resolve(&request).vendor_voice_id, "zog-vendor-id");
    }

    #[test]
    fn serializes_in_vendor_shape() {
        let resolved = VoiceResolver::default().resolve(&request(Emotion::Neutral));
        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(json["vendor_voice_id"], "9BWtsMINqrJLrRacOk9x");
        assert_eq!(json["voice_settings"]["stability"], 0.5);
        assert_eq!(json["voice_settings"]["use_speaker_boost"], true);
        assert_eq!(json["age_factor"], 1.0);
    }
}
