use secrecy::SecretString;

/// Header name for user-provided vendor API keys (BYOK)
pub const PROVIDER_API_KEY_HEADER: &str = "X-Provider-API-Key";

/// Runtime context for vendor requests
///
/// Shared across the speech and content generation flows
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP request parts (method, URI, headers, extensions)
    pub parts: http::request::Parts,
    /// User-provided API key that overrides the configured key
    pub api_key: Option<SecretString>,
}

impl RequestContext {
    /// Build the context from incoming request parts
    pub fn from_parts(parts: http::request::Parts) -> Self {
        let api_key = parts
            .headers
            .get(PROVIDER_API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(|value| SecretString::from(value.to_string()));

        Self { parts, api_key }
    }

    /// Create a minimal context for non-HTTP use
    ///
    /// Contains empty headers and no API key
    pub fn empty() -> Self {
        let (parts, ()) = http::Request::new(()).into_parts();

        Self { parts, api_key: None }
    }

    /// Access request headers
    pub const fn headers(&self) -> &http::HeaderMap {
        &self.parts.headers
    }
}
