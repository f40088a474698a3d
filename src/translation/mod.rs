mod error;
mod language;
mod libretranslate;
mod mymemory;
mod orchestrator;
mod provider;
mod request;

pub use error::{
    FailureKind, INTERNAL_ERROR_MESSAGE, INVALID_REQUEST_MESSAGE, ProviderError, TranslateError,
    UNAVAILABLE_MESSAGE,
};
pub use language::{
    Language, SUPPORTED_LANGUAGES, language_name, languages, print_languages, validate_language,
};
pub use libretranslate::{DEFAULT_ENDPOINT as LIBRETRANSLATE_ENDPOINT, LibreTranslate};
pub use mymemory::{DEFAULT_ENDPOINT as MYMEMORY_ENDPOINT, MyMemory};
pub use orchestrator::{AttemptObserver, DEFAULT_TIMEOUT, Orchestrator, TracingObserver};
pub use provider::{Provider, fetch_json, http_client};
pub use request::{TranslationRequest, TranslationResult, ValidRequest};
