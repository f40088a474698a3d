use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::error::ProviderError;

/// How much of an error response body is kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 512;

/// A remote translation service.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Name used in logs and error records.
    fn name(&self) -> &str;

    /// Provider-specific bound on a single attempt, if any.
    fn timeout(&self) -> Option<Duration> {
        None
    }

    /// Translates `text` and returns the translated string.
    async fn translate(&self, text: &str, source: &str, target: &str)
    -> Result<String, ProviderError>;
}

/// Builds the HTTP client shared by all providers.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("tl-relay/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Sends `request` and decodes a successful JSON body into `T`.
///
/// Non-2xx statuses become [`ProviderError::Http`] and undecodable bodies
/// become [`ProviderError::MalformedResponse`].
pub async fn fetch_json<T: DeserializeOwned>(
    provider: &str,
    timeout: Duration,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, timeout, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Http {
            provider: provider.to_string(),
            status,
            body: read_error_body(response).await,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, timeout, e))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ProviderError::malformed(provider, format!("invalid JSON body: {e}")))
}

/// Reads at most about [`ERROR_BODY_LIMIT`] bytes of an error body.
async fn read_error_body(mut response: Response) -> String {
    let mut body = Vec::new();
    while body.len() <= ERROR_BODY_LIMIT {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) | Err(_) => break,
        }
    }
    truncate(String::from_utf8_lossy(&body).into_owned(), ERROR_BODY_LIMIT)
}

fn truncate(mut body: String, limit: usize) -> String {
    if body.len() > limit {
        let mut end = limit;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_body_untouched() {
        assert_eq!(truncate("bad gateway".to_string(), 512), "bad gateway");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // "é" is two bytes; cutting at 3 would split the second one.
        let truncated = truncate("éé".repeat(4), 3);
        assert_eq!(truncated, "é...");
    }
}
