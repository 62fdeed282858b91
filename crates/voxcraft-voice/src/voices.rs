use indexmap::IndexMap;

/// Built-in voice names and their `ElevenLabs` voice IDs
const BUILTIN_VOICES: [(&str, &str); 20] = [
    ("Aria", "9BWtsMINqrJLrRacOk9x"),
    ("Roger", "CwhRBWXzGAHq8TQ4Fs17"),
    ("Sarah", "EXAVITQu4vr4xnSDxMaL"),
    ("Laura", "FGY2WhTYpPnrIDTdsKH5"),
    ("Charlie", "IKne3meq5aSn9XLyUdCD"),
    ("George", "JBFqnCBsd6RMkjVDRZzb"),
    ("Callum", "N2lVS1w4EtoT3dr4eOWO"),
    ("River", "SAz9YHcvj6GT2YYXdXww"),
    ("Liam", "TX3LPaxmHKxFdv7VOQHJ"),
    ("Charlotte", "XB0fDUnXU5powFXDhCwa"),
    ("Alice", "Xb7hH8MSUJpSbSDYk0k2"),
    ("Matilda", "XrExE9yKIg1WjnnlVkGX"),
    ("Will", "bIHbv24MWmeRgasZH58o"),
    ("Jessica", "cgSgspJ2msm6clMCkdW9"),
    ("Eric", "cjVigY5qzO86Huf0OWal"),
    ("Chris", "iP95p4xoKVk53GoZ742B"),
    ("Brian", "nPczCjzI2devNBz1zQrb"),
    ("Daniel", "onwK4e9ZLuTAKqWW03F9"),
    ("Lily", "pFZP5JQG7iQjIQuC4Bku"),
    ("Bill", "pqHfZKP75CvOlQylNhV4"),
];

/// Mapping from user-facing voice names to vendor voice IDs
///
/// Lookups are exact and case-sensitive. Names missing from the table are
/// treated as raw vendor IDs by the resolver.
#[derive(Debug, Clone)]
pub struct VoiceTable {
    entries: IndexMap<String, String>,
}

impl Default for VoiceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VoiceTable {
    /// Table with the built-in voices only
    pub fn builtin() -> Self {
        let entries = BUILTIN_VOICES
            .iter()
            .map(|(name, id)| ((*name).to_string(), (*id).to_string()))
            .collect();

        Self { entries }
    }

    /// Table with no entries, every name passes through
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add or replace entries; later entries win
    #[must_use]
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, id) in overrides {
            self.entries.insert(name.into(), id.into());
        }
        self
    }

    /// Vendor ID registered for `name`, if any
    pub fn vendor_id(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, vendor_id)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), id.as_str()))
    }
}
