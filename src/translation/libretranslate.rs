//! Primary provider: a LibreTranslate-compatible `/translate` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ProviderError;
use super::provider::{Provider, fetch_json};

pub const DEFAULT_ENDPOINT: &str = "https://libretranslate.com/translate";

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl TranslateResponse {
    fn into_text(self, provider: &str) -> Result<String, ProviderError> {
        self.translated_text
            .ok_or_else(|| ProviderError::malformed(provider, "missing translatedText"))
    }
}

pub struct LibreTranslate {
    name: String,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
    client: Client,
}

impl LibreTranslate {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            api_key,
            timeout,
            client,
        }
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    fn name(&self) -> &str {
        &self.name
    }

    fn timeout(&self) -> Option<Duration> {
        Some(self.timeout)
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let body = TranslateBody {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let request = self.client.post(&self.endpoint).json(&body);
        let response: TranslateResponse = fetch_json(&self.name, self.timeout, request).await?;
        response.into_text(&self.name)
    }
}
