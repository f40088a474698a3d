use crate::translation::TranslationRequest;

/// What the user is currently working with in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorState {
    source_language: String,
    target_language: String,
    source_text: String,
    translated_text: String,
    is_translating: bool,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self::new("en", "es")
    }
}

impl TranslatorState {
    pub fn new(source_language: impl Into<String>, target_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            source_text: String::new(),
            translated_text: String::new(),
            is_translating: false,
        }
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub const fn is_translating(&self) -> bool {
        self.is_translating
    }

    pub fn set_source_language(&mut self, lang: impl Into<String>) {
        self.source_language = lang.into();
    }

    pub fn set_target_language(&mut self, lang: impl Into<String>) {
        self.target_language = lang.into();
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn set_translated_text(&mut self, text: impl Into<String>) {
        self.translated_text = text.into();
    }

    pub const fn set_translating(&mut self, status: bool) {
        self.is_translating = status;
    }

    /// Exchanges the languages and the texts, so the last translation
    /// becomes the new source.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
    }

    /// Whether there is source text worth sending.
    pub fn has_source_text(&self) -> bool {
        !self.source_text.trim().is_empty()
    }

    pub fn request(&self) -> TranslationRequest {
        TranslationRequest::new(
            self.source_text.clone(),
            self.source_language.clone(),
            self.target_language.clone(),
        )
    }
}
