use std::time::Instant;

use secrecy::SecretString;
use voxcraft_config::{ContentConfig, ContentProviderConfig, ContentProviderType};
use voxcraft_core::RequestContext;
use voxcraft_telemetry::VendorMetrics;

use crate::{
    error::ContentError,
    prompt::{system_prompt, user_prompt},
    protocol::{ChatMessage, ChatRequest},
    provider::{ChatProvider, openai::OpenAiProvider},
    request::ContentPayload,
    types::GeneratedContent,
};

/// Sampling parameters sent with every completion
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl From<&ContentConfig> for CompletionSettings {
    fn from(config: &ContentConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Content generation server
pub struct Server {
    provider: Option<Box<dyn ChatProvider>>,
    settings: CompletionSettings,
    metrics: VendorMetrics,
}

impl Server {
    pub fn new(provider: Option<Box<dyn ChatProvider>>, settings: CompletionSettings) -> Self {
        Self {
            provider,
            settings,
            metrics: VendorMetrics::new("content"),
        }
    }

    /// Validate the payload, prompt the model and interpret its answer
    pub async fn generate(
        &self,
        payload: ContentPayload,
        context: &RequestContext,
    ) -> crate::error::Result<GeneratedContent> {
        let request = payload.into_request()?;
        let provider = self.provider.as_deref().ok_or(ContentError::NotConfigured)?;

        tracing::info!(
            content_type = %request.content_type,
            length = %request.length,
            "generating content"
        );

        let chat = ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt(&request)),
                ChatMessage::user(user_prompt(&request)),
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        let start = Instant::now();
        let result = provider.complete(&chat, context).await;
        self.metrics.record(provider.name(), result.is_ok(), start);

        Ok(GeneratedContent::from_model_output(
            &result?,
            request.voice_suggestions,
            request.emotional_cues,
        ))
    }
}

/// Builder for constructing the content server from configuration
pub struct ContentServerBuilder<'a> {
    config: &'a voxcraft_config::Config,
}

impl<'a> ContentServerBuilder<'a> {
    pub const fn new(config: &'a voxcraft_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let content = &self.config.content;

        let provider = match content.providers.first() {
            Some((name, provider_config)) => {
                tracing::debug!("Initializing content provider: {name}");

                let provider: Box<dyn ChatProvider> = match provider_config.provider_type {
                    ContentProviderType::Openai => Box::new(OpenAiProvider::new(
                        name.clone(),
                        resolve_api_key(name, provider_config)?,
                        provider_config.base_url.clone(),
                        provider_config.timeout_secs,
                    )?),
                };

                if content.providers.len() > 1 {
                    tracing::warn!("Multiple content providers configured, only '{name}' serves requests");
                }

                Some(provider)
            }
            None => {
                tracing::debug!("No content providers configured");
                None
            }
        };

        Ok(Server::new(provider, CompletionSettings::from(content)))
    }
}

fn resolve_api_key(name: &str, config: &ContentProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| ContentError::ConfigError(format!("API key required for content provider '{name}'")))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;

    struct ScriptedProvider {
        reply: String,
        seen: Arc<Mutex<Vec<ChatRequest>>>,
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn complete(&self, request: &ChatRequest, _context: &RequestContext) -> crate::error::Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn settings() -> CompletionSettings {
        CompletionSettings::from(&ContentConfig::default())
    }

    fn payload(json: serde_json::Value) -> ContentPayload {
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn sends_prompts_with_configured_sampling() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let provider = ScriptedProvider {
            reply: r#"{"content":"Welcome to the show"}"#.to_string(),
            seen: seen.clone(),
        };
        let server = Server::new(Some(Box::new(provider)), settings());

        let content = server
            .generate(
                payload(serde_json::json!({"type": "podcast", "topic": "bees"})),
                &RequestContext::empty(),
            )
            .await
            .unwrap();

        assert_eq!(content.content, "Welcome to the show");

        let seen = seen.lock().unwrap();
        let request = &seen[0];
        assert_eq!(request.model, "gpt-4.1-2025-04-14");
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(request.messages.len(), 2);
        assert!(request.messages[1].content.as_deref().unwrap().contains("about \"bees\""));
    }

    #[tokio::test]
    async fn validation_happens_before_provider_check() {
        let server = Server::new(None, settings());

        let err = server
            .generate(payload(serde_json::json!({"type": "story"})), &RequestContext::empty())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));

        let err = server
            .generate(
                payload(serde_json::json!({"type": "story", "topic": "owls"})),
                &RequestContext::empty(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NotConfigured));
    }
}
