use serde::{Deserialize, Serialize};

/// Voice settings in the shape the TTS vendor expects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    pub style: f64,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    /// Apply caller-supplied overrides on top of these settings
    pub fn merged(self, overrides: &VoiceSettingsOverrides) -> Self {
        Self {
            stability: overrides.stability.unwrap_or(self.stability),
            similarity_boost: overrides.similarity_boost.unwrap_or(self.similarity_boost),
            style: overrides.style.unwrap_or(self.style),
            use_speaker_boost: overrides.use_speaker_boost.unwrap_or(self.use_speaker_boost),
        }
    }
}

/// Partial voice settings as sent by clients
///
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceSettingsOverrides {
    #[serde(default)]
    pub stability: Option<f64>,
    #[serde(default)]
    pub similarity_boost: Option<f64>,
    #[serde(default)]
    pub style: Option<f64>,
    #[serde(default)]
    pub use_speaker_boost: Option<bool>,
}

/// Saturate `value` into `[0, 1]`
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.stability, 0.5);
        assert_eq!(settings.similarity_boost, 0.75);
        assert_eq!(settings.style, 0.0);
        assert!(settings.use_speaker_boost);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let overrides: VoiceSettingsOverrides = serde_json::from_str(r#"{"stability": 0.9}"#).unwrap();
        let settings = VoiceSettings::default().merged(&overrides);

        assert_eq!(settings.stability, 0.9);
        assert_eq!(settings.similarity_boost, 0.75);
        assert_eq!(settings.style, 0.0);
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_unit(1.4), 1.0);
        assert_eq!(clamp_unit(-0.3), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
