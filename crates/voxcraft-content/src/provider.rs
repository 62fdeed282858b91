pub mod openai;

use async_trait::async_trait;
use voxcraft_core::RequestContext;

use crate::protocol::ChatRequest;

/// Trait for chat completion vendors
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run a completion and return the text of the first choice
    async fn complete(&self, request: &ChatRequest, context: &RequestContext) -> crate::error::Result<String>;

    /// Get the provider name
    fn name(&self) -> &str;
}
