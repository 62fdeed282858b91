use std::time::Duration;

use reqwest::Client;

use crate::error::ContentError;

/// HTTP client for one chat provider, reusing connections across requests
pub(crate) fn http_client(timeout_secs: u64) -> crate::error::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
        .map_err(|e| ContentError::ConfigError(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_configured_timeout() {
        assert!(http_client(30).is_ok());
    }
}
