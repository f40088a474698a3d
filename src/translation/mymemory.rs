//! Fallback provider: the MyMemory `get` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::error::ProviderError;
use super::provider::{Provider, fetch_json};

pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Deserialize)]
struct GetResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
    // MyMemory reports quota and language-pair errors in the body, sometimes
    // as a number and sometimes as a string.
    #[serde(rename = "responseStatus")]
    response_status: Option<Value>,
    #[serde(rename = "responseDetails")]
    response_details: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl GetResponse {
    fn status(&self) -> Option<u16> {
        match self.response_status.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn into_text(self, provider: &str) -> Result<String, ProviderError> {
        if let Some(code) = self.status().filter(|code| *code != 200) {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY);
            let body = self
                .response_details
                .map(|d| d.as_str().map_or_else(|| d.to_string(), str::to_string))
                .unwrap_or_default();
            return Err(ProviderError::Http {
                provider: provider.to_string(),
                status,
                body,
            });
        }

        self.response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| ProviderError::malformed(provider, "missing responseData.translatedText"))
    }
}

pub struct MyMemory {
    name: String,
    endpoint: String,
    email: Option<String>,
    timeout: Duration,
    client: Client,
}

impl MyMemory {
    pub fn new(
        name: impl Into<String>,
        endpoint: impl Into<String>,
        email: Option<String>,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            email,
            timeout,
            client,
        }
    }

    fn request_url(&self, text: &str, source: &str, target: &str) -> Result<Url, ProviderError> {
        let langpair = format!("{source}|{target}");
        let mut params = vec![("q", text), ("langpair", langpair.as_str())];
        if let Some(email) = self.email.as_deref() {
            params.push(("de", email));
        }

        // Endpoints are checked when the config is resolved, so this only
        // fails for providers built by hand with a bad URL.
        Url::parse_with_params(&self.endpoint, &params).map_err(|e| ProviderError::Network {
            provider: self.name.clone(),
            source: Box::new(e),
        })
    }
}

#[async_trait]
impl Provider for MyMemory {
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
        let url = self.request_url(text, source, target)?;
        let request = self.client.get(url);
        let response: GetResponse = fetch_json(&self.name, self.timeout, request).await?;
        response.into_text(&self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn provider(email: Option<&str>) -> MyMemory {
        MyMemory::new(
            "mymemory",
            DEFAULT_ENDPOINT,
            email.map(str::to_string),
            Duration::from_secs(10),
            Client::new(),
        )
    }

    #[test]
    fn test_request_url_langpair() {
        let url = provider(None).request_url("Hello world", "en", "es").unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Hello world".to_string()),
                ("langpair".to_string(), "en|es".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_url_with_email() {
        let url = provider(Some("me@example.com"))
            .request_url("Hi", "en", "de")
            .unwrap();
        assert!(url.query_pairs().any(|(k, v)| k == "de" && v == "me@example.com"));
    }

    #[test]
    fn test_extract_nested_text() {
        let response: GetResponse = serde_json::from_str(
            r#"{"responseData":{"translatedText":"Hola","match":1},"responseStatus":200}"#,
        )
        .unwrap();
        assert_eq!(response.into_text("mymemory").unwrap(), "Hola");
    }

    #[test]
    fn test_missing_response_data_is_malformed() {
        let response: GetResponse = serde_json::from_str(r#"{"matches":[]}"#).unwrap();
        let err = response.into_text("mymemory").unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse { .. }));

        let response: GetResponse = serde_json::from_str(r#"{"responseData":{}}"#).unwrap();
        assert!(response.into_text("mymemory").is_err());
    }

    #[test]
    fn test_in_body_error_status() {
        let response: GetResponse = serde_json::from_str(
            r#"{"responseData":{"translatedText":"INVALID LANGUAGE PAIR"},"responseStatus":"403","responseDetails":"INVALID LANGUAGE PAIR"}"#,
        )
        .unwrap();
        match response.into_text("mymemory").unwrap_err() {
            ProviderError::Http { status, body, .. } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "INVALID LANGUAGE PAIR");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_endpoint_fails_the_attempt() {
        let provider = MyMemory::new(
            "mymemory",
            "not a url",
            None,
            Duration::from_secs(10),
            Client::new(),
        );
        let err = provider.request_url("Hi", "en", "de").unwrap_err();
        assert_eq!(err.provider(), "mymemory");
        assert!(matches!(err, ProviderError::Network { .. }));
    }
}
