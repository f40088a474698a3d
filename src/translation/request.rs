use serde::{Deserialize, Serialize};

use super::error::TranslateError;

/// A request to translate `text` from one language to another.
///
/// Every field is optional on the wire so that a missing parameter can be
/// reported as [`TranslateError::InvalidRequest`] instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "sourceLang")]
    pub source_language: Option<String>,
    #[serde(default, rename = "targetLang")]
    pub target_language: Option<String>,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            source_language: Some(source_language.into()),
            target_language: Some(target_language.into()),
        }
    }

    /// Checks that all three parameters are present.
    ///
    /// Text is passed through untouched (the empty string is valid); a
    /// language code consisting only of whitespace counts as missing.
    pub fn validate(&self) -> Result<ValidRequest<'_>, TranslateError> {
        let text = self.text.as_deref();
        let source = self.source_language.as_deref().filter(|c| !c.trim().is_empty());
        let target = self.target_language.as_deref().filter(|c| !c.trim().is_empty());

        match (text, source, target) {
            (Some(text), Some(source), Some(target)) => Ok(ValidRequest {
                text,
                source,
                target,
            }),
            _ => Err(TranslateError::InvalidRequest),
        }
    }
}

/// A request whose parameters are known to be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRequest<'a> {
    pub text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

impl ValidRequest<'_> {
    /// Source and target name the same language; nothing to translate.
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }
}

/// The outcome of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "translatedText")]
    translated_text: String,
    #[serde(rename = "sourceLang")]
    source_language: String,
    #[serde(rename = "targetLang")]
    target_language: String,
}

impl TranslationResult {
    pub(crate) fn new(translated_text: String, request: &ValidRequest<'_>) -> Self {
        Self {
            translated_text,
            source_language: request.source.to_string(),
            target_language: request.target.to_string(),
        }
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn into_text(self) -> String {
        self.translated_text
    }
}
