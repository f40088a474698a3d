use std::sync::Arc;
use std::time::Duration;

use super::error::{ProviderError, TranslateError};
use super::provider::Provider;
use super::request::{TranslationRequest, TranslationResult};

/// Default bound on a single provider attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Receives the outcome of every provider attempt.
///
/// The orchestrator never surfaces individual provider failures to its
/// caller; this is where they go instead.
pub trait AttemptObserver: Send + Sync {
    fn attempt_failed(&self, error: &ProviderError);

    fn attempt_succeeded(&self, _provider: &str) {}

    fn chain_exhausted(&self, _attempts: usize) {}
}

/// Emits attempt outcomes as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl AttemptObserver for TracingObserver {
    fn attempt_failed(&self, error: &ProviderError) {
        tracing::warn!(
            provider = error.provider(),
            kind = %error.kind(),
            %error,
            "translation provider failed, trying next"
        );
    }

    fn attempt_succeeded(&self, provider: &str) {
        tracing::debug!(provider, "translation provider succeeded");
    }

    fn chain_exhausted(&self, attempts: usize) {
        tracing::error!(attempts, "all translation providers failed");
    }
}

/// Resolves translations by walking an ordered chain of providers.
#[derive(Clone)]
pub struct Orchestrator {
    providers: Vec<Arc<dyn Provider>>,
    timeout: Duration,
    observer: Arc<dyn AttemptObserver>,
}

impl Orchestrator {
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_TIMEOUT,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Sets the bound used for providers that do not declare their own.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn AttemptObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let request = request.validate()?;

        if request.is_identity() {
            return Ok(TranslationResult::new(request.text.to_string(), &request));
        }

        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let outcome = self
                .attempt(provider.as_ref(), request.text, request.source, request.target)
                .await;

            match outcome {
                Ok(text) => {
                    self.observer.attempt_succeeded(provider.name());
                    return Ok(TranslationResult::new(text, &request));
                }
                Err(error) => {
                    self.observer.attempt_failed(&error);
                    failures.push(error);
                }
            }
        }

        self.observer.chain_exhausted(failures.len());
        Err(TranslateError::AllProvidersUnavailable { failures })
    }

    // Dropping the inner future on timeout aborts the in-flight request.
    async fn attempt(
        &self,
        provider: &dyn Provider,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let timeout = provider.timeout().unwrap_or(self.timeout);

        tokio::time::timeout(timeout, provider.translate(text, source, target))
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::Timeout {
                    provider: provider.name().to_string(),
                    after: timeout,
                })
            })
    }
}
