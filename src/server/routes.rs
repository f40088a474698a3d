use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::state::ServerState;
use crate::translation::{
    Language, TranslateError, TranslationRequest, TranslationResult, languages,
};

/// `POST /api/translate`
pub async fn translate_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<TranslationResult>, TranslateError> {
    // Parsed by hand so a malformed body maps to the internal-error shape
    // rather than axum's own rejection responses.
    let request: TranslationRequest = serde_json::from_slice(&body).map_err(|err| {
        error!(%err, "Rejecting /api/translate request with unreadable body");
        TranslateError::internal(err.to_string())
    })?;

    info!(
        source = request.source_language.as_deref(),
        target = request.target_language.as_deref(),
        chars = request.text.as_deref().map(|t| t.chars().count()),
        "Received /api/translate request"
    );

    match state.orchestrator().translate(&request).await {
        Ok(result) => {
            debug!("Translation request completed");
            Ok(Json(result))
        }
        Err(err) => {
            match &err {
                TranslateError::InvalidRequest => {
                    info!("Rejecting request with missing parameters");
                }
                TranslateError::AllProvidersUnavailable { failures } => {
                    debug!(attempts = failures.len(), "Responding with service unavailable");
                }
                TranslateError::Internal { detail } => error!(%detail, "Translation failed"),
            }
            Err(err)
        }
    }
}

/// `GET /api/languages`
pub async fn languages_handler() -> Json<Vec<Language>> {
    Json(languages())
}

/// `GET /health`
pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{AttemptObserver, Orchestrator, Provider, ProviderError};
    use async_trait::async_trait;
    use std::io::{self, Write};
    use std::sync::Mutex;

    struct Down;

    #[async_trait]
    impl Provider for Down {
        fn name(&self) -> &str {
            "down"
        }

        async fn translate(
            &self,
            _text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::malformed("down", "no body"))
        }
    }

    struct Silent;

    impl AttemptObserver for Silent {
        fn attempt_failed(&self, _error: &ProviderError) {}
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_unavailable_is_not_logged_again_as_error() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::ERROR)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let orchestrator = Orchestrator::new(vec![Arc::new(Down)]).with_observer(Arc::new(Silent));
        let state = Arc::new(ServerState::new(orchestrator));
        let body = Bytes::from_static(br#"{"text":"Hi","sourceLang":"en","targetLang":"es"}"#);

        let result = translate_handler(State(state), body).await;

        assert!(matches!(
            result,
            Err(TranslateError::AllProvidersUnavailable { .. })
        ));
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
