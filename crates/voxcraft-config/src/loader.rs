use std::path::Path;

use anyhow::Context;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no vendor is configured or a section holds
    /// values the server cannot use
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_has_providers()?;
        self.validate_tts_config()?;
        self.validate_content_config()?;
        Ok(())
    }

    /// Ensure at least one vendor is configured
    fn validate_has_providers(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() && self.content.providers.is_empty() {
            anyhow::bail!("at least one provider must be configured (TTS provider or content provider)");
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if self.tts.default_voice.as_deref().is_some_and(|v| v.trim().is_empty()) {
            anyhow::bail!("tts.default_voice must not be empty");
        }

        if self.tts.default_model.as_deref().is_some_and(|m| m.trim().is_empty()) {
            anyhow::bail!("tts.default_model must not be empty");
        }

        for (name, id) in &self.tts.voices {
            if name.trim().is_empty() || id.trim().is_empty() {
                anyhow::bail!("tts.voices entries must have a non-empty name and vendor ID (got '{name}' = '{id}')");
            }

            if matches!(id.as_str(), "." | "..") {
                anyhow::bail!("tts.voices vendor ID for '{name}' cannot be '{id}'");
            }
        }

        Ok(())
    }

    fn validate_content_config(&self) -> anyhow::Result<()> {
        let content = &self.content;

        if !(0.0..=2.0).contains(&content.temperature) {
            anyhow::bail!("content.temperature must be between 0.0 and 2.0");
        }

        if content.max_tokens == 0 {
            anyhow::bail!("content.max_tokens must be greater than 0");
        }

        if content.model.trim().is_empty() {
            anyhow::bail!("content.model must not be empty");
        }

        Ok(())
    }
}
